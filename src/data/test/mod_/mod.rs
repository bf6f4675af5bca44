use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};
use uuid::Uuid;

use crate::{
    data::mod_::ModRepository,
    model::mod_::{CreateModParams, UpdateModParams},
};

mod create;
mod deactivate;
mod get_by_user_paginated;
mod tags;
mod update;

/// Builds create parameters for a mod owned by `user_id` on `host_id`.
fn params(slug: &str, user_id: Uuid, host_id: Uuid) -> CreateModParams {
    CreateModParams {
        slug: slug.to_string(),
        name: "Skybox Overhaul".to_string(),
        description: Some("Replaces every skybox".to_string()),
        user_id,
        host_id,
        category_id: None,
        tags: vec![],
    }
}
