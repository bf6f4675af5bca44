use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

use crate::{data::comment::CommentRepository, model::comment::CreateCommentParams};

mod create;
mod for_mod;
