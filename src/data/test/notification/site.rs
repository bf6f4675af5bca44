use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use super::*;

async fn create_site_notification(
    db: &sea_orm::DatabaseConnection,
    title: &str,
    released_at: chrono::DateTime<Utc>,
) -> Result<entity::site_notification::Model, DbErr> {
    let now = Utc::now().fixed_offset();
    entity::site_notification::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        is_active: ActiveValue::Set(true),
        released_at: ActiveValue::Set(released_at.fixed_offset()),
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set("Announcement body.".to_string()),
    }
    .insert(db)
    .await
}

/// Tests that only already-released site notifications are listed.
///
/// Expected: the future announcement is held back
#[tokio::test]
async fn lists_only_released_announcements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_site_notification(db, "past", Utc::now() - Duration::hours(1)).await?;
    create_site_notification(db, "future", Utc::now() + Duration::hours(1)).await?;

    let repo = NotificationRepository::new(db);
    let released = repo.released_site_notifications().await?;

    assert_eq!(released.len(), 1);
    assert_eq!(released[0].title, "past");

    Ok(())
}
