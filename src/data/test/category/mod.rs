use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use uuid::Uuid;

use crate::{data::category::CategoryRepository, model::category::CreateCategoryParams};

mod children;
mod create;
mod reparent;

fn params(name: &str, parent_id: Option<Uuid>) -> CreateCategoryParams {
    CreateCategoryParams {
        parent_id,
        name: name.to_string(),
        description: None,
    }
}
