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
                    .table(Post::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Post::Id))
                    .col(common::created_at(Post::CreatedAt))
                    .col(common::updated_at(Post::UpdatedAt))
                    .col(common::is_active(Post::IsActive))
                    .col(timestamp_with_time_zone_null(Post::PublishedAt))
                    .col(string_len(Post::Title, 255))
                    .col(text(Post::Content))
                    .col(uuid(Post::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_user_id")
                            .from(Post::Table, Post::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "post").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "post").await?;

        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    PublishedAt,
    Title,
    Content,
    UserId,
}
