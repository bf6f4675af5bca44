use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

use crate::factory::helpers::{next_seq, now};

/// Inserts a category under the given parent (or a root category for `None`).
///
/// `depth` and `lineage` keep their defaults here; the trigger that maintains
/// them only exists on the PostgreSQL schema.
pub async fn create_category(
    db: &DatabaseConnection,
    parent_id: Option<Uuid>,
) -> Result<entity::category::Model, DbErr> {
    let timestamp = now();
    entity::category::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        parent_id: ActiveValue::Set(parent_id),
        r#type: ActiveValue::Set(entity::category::CategoryType::Mod),
        name: ActiveValue::Set(format!("category-{}", next_seq())),
        description: ActiveValue::Set(None),
        depth: ActiveValue::Set(0),
        lineage: ActiveValue::Set(json!([])),
    }
    .insert(db)
    .await
}
