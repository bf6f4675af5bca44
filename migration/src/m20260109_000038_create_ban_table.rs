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
                    .table(Ban::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Ban::Id))
                    .col(common::created_at(Ban::CreatedAt))
                    .col(common::updated_at(Ban::UpdatedAt))
                    .col(common::is_active(Ban::IsActive))
                    .col(text(Ban::Reason))
                    .col(text_null(Ban::Description))
                    .col(timestamp_with_time_zone_null(Ban::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "ban").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "ban").await?;

        manager
            .drop_table(Table::drop().table(Ban::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ban {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Reason,
    Description,
    ExpiresAt,
}
