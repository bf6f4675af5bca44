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
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Tag::Id))
                    .col(common::created_at(Tag::CreatedAt))
                    .col(common::updated_at(Tag::UpdatedAt))
                    .col(common::is_active(Tag::IsActive))
                    .col(string_len(Tag::Name, 64))
                    .col(text_null(Tag::Description))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "tag").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "tag").await?;

        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Name,
    Description,
}
