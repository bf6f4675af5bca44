use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{next_seq, now};

/// Inserts a tag with a unique name.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    let timestamp = now();
    entity::tag::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        name: ActiveValue::Set(format!("tag-{}", next_seq())),
        description: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
