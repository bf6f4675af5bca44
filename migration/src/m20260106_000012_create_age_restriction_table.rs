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
                    .table(AgeRestriction::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(AgeRestriction::Id))
                    .col(common::created_at(AgeRestriction::CreatedAt))
                    .col(common::updated_at(AgeRestriction::UpdatedAt))
                    .col(common::is_active(AgeRestriction::IsActive))
                    .col(string_len(AgeRestriction::Name, 64))
                    .col(text(AgeRestriction::Description))
                    .col(string_len_null(AgeRestriction::AvatarImage, 255))
                    .col(integer(AgeRestriction::MinimumAge))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "age_restriction").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "age_restriction").await?;

        manager
            .drop_table(Table::drop().table(AgeRestriction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AgeRestriction {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Name,
    Description,
    AvatarImage,
    MinimumAge,
}
