use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User,
    m20260109_000035_create_notification_table::Notification,
};
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserNotification::Table)
                    .if_not_exists()
                    .col(uuid(UserNotification::UserId))
                    .col(uuid(UserNotification::NotificationId))
                    .col(common::created_at(UserNotification::CreatedAt))
                    .col(common::updated_at(UserNotification::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserNotification::UserId)
                            .col(UserNotification::NotificationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_notification_user_id")
                            .from(UserNotification::Table, UserNotification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_notification_notification_id")
                            .from(UserNotification::Table, UserNotification::NotificationId)
                            .to(Notification::Table, Notification::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "user_notification").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "user_notification").await?;

        manager
            .drop_table(Table::drop().table(UserNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserNotification {
    Table,
    UserId,
    NotificationId,
    CreatedAt,
    UpdatedAt,
}
