use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

use crate::data::notification::NotificationRepository;

mod deliver;
mod site;
