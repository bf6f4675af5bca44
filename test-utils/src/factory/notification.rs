use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{next_seq, now};

/// Inserts a notification with a unique title.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    let timestamp = now();
    entity::notification::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        title: ActiveValue::Set(format!("notification-{}", next_seq())),
        content: ActiveValue::Set("Something happened.".to_string()),
        priority: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
