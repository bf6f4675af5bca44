use sea_orm_migration::{prelude::*, schema::*};

use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteNotification::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(SiteNotification::Id))
                    .col(common::created_at(SiteNotification::CreatedAt))
                    .col(common::updated_at(SiteNotification::UpdatedAt))
                    .col(common::is_active(SiteNotification::IsActive))
                    .col(timestamp_with_time_zone(SiteNotification::ReleasedAt))
                    .col(string_len(SiteNotification::Title, 64))
                    .col(text(SiteNotification::Content))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "site_notification").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "site_notification").await?;

        manager
            .drop_table(Table::drop().table(SiteNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteNotification {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    ReleasedAt,
    Title,
    Content,
}
