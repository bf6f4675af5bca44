//! Notification repository: targeted notifications fanned out through
//! `user_notification`, plus site-wide announcements.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        content: String,
        priority: Option<i32>,
    ) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now().fixed_offset();

        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            priority: ActiveValue::Set(priority),
        }
        .insert(self.db)
        .await
    }

    /// Fans a notification out to the given users.
    ///
    /// Returns early without touching the database when the recipient list is
    /// empty.
    pub async fn deliver(&self, notification_id: Uuid, user_ids: &[Uuid]) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().fixed_offset();
        let rows = user_ids
            .iter()
            .map(|user_id| entity::user_notification::ActiveModel {
                user_id: ActiveValue::Set(*user_id),
                notification_id: ActiveValue::Set(notification_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            });

        entity::prelude::UserNotification::insert_many(rows)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Lists the active notifications delivered to a user, newest first.
    pub async fn for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        let rows = entity::prelude::UserNotification::find()
            .filter(entity::user_notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_notification::Column::CreatedAt)
            .find_also_related(entity::prelude::Notification)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, notification)| notification)
            .filter(|notification| notification.is_active)
            .collect())
    }

    /// Lists the active site notifications whose release time has passed,
    /// newest first.
    pub async fn released_site_notifications(
        &self,
    ) -> Result<Vec<entity::site_notification::Model>, DbErr> {
        entity::prelude::SiteNotification::find()
            .filter(entity::site_notification::Column::IsActive.eq(true))
            .filter(
                entity::site_notification::Column::ReleasedAt.lte(Utc::now().fixed_offset()),
            )
            .order_by_desc(entity::site_notification::Column::ReleasedAt)
            .all(self.db)
            .await
    }
}
