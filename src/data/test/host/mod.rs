use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::{
    data::host::HostRepository,
    model::host::{CreateHostParams, CreateHostPublisherParams, CreateHostReleaseParams},
};

mod create;
mod releases;
