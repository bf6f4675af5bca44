//! Comment threads. Same derived-column setup as the category tree: the
//! `refresh_depth_and_lineage` trigger keeps `depth` and `lineage` in sync
//! with the `parent_id` chain.

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260107_000014_create_mod_table::Mod,
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
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Comment::Id))
                    .col(common::created_at(Comment::CreatedAt))
                    .col(common::updated_at(Comment::UpdatedAt))
                    .col(common::is_active(Comment::IsActive))
                    .col(uuid_null(Comment::ParentId))
                    .col(text(Comment::Content))
                    .col(integer(Comment::Depth).default(0))
                    .col(
                        json_binary(Comment::Lineage)
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(uuid(Comment::UserId))
                    .col(uuid(Comment::ModId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_parent_id")
                            .from(Comment::Table, Comment::ParentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_user_id")
                            .from(Comment::Table, Comment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_mod_id")
                            .from(Comment::Table, Comment::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "comment").await?;
        common::create_refresh_depth_and_lineage_trigger(manager, "comment").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_depth_and_lineage_trigger(manager, "comment").await?;
        common::drop_refresh_updated_at_trigger(manager, "comment").await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    ParentId,
    Content,
    Depth,
    Lineage,
    UserId,
    ModId,
}
