use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_user_table::User;
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Image::Id))
                    .col(common::created_at(Image::CreatedAt))
                    .col(common::updated_at(Image::UpdatedAt))
                    .col(common::is_active(Image::IsActive))
                    .col(string_len(Image::Name, 255))
                    .col(text(Image::Description))
                    .col(string_len(Image::Image, 255))
                    .col(uuid(Image::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_user_id")
                            .from(Image::Table, Image::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "image").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "image").await?;

        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Name,
    Description,
    Image,
    UserId,
}
