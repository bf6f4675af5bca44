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
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Notification::Id))
                    .col(common::created_at(Notification::CreatedAt))
                    .col(common::updated_at(Notification::UpdatedAt))
                    .col(common::is_active(Notification::IsActive))
                    .col(string_len(Notification::Title, 64))
                    .col(text(Notification::Content))
                    .col(integer_null(Notification::Priority))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "notification").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "notification").await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Title,
    Content,
    Priority,
}
