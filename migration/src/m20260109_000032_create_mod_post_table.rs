use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000014_create_mod_table::Mod, m20260109_000031_create_post_table::Post,
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
                    .table(ModPost::Table)
                    .if_not_exists()
                    .col(uuid(ModPost::ModId))
                    .col(uuid(ModPost::PostId))
                    .col(common::created_at(ModPost::CreatedAt))
                    .col(common::updated_at(ModPost::UpdatedAt))
                    .primary_key(Index::create().col(ModPost::ModId).col(ModPost::PostId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_post_mod_id")
                            .from(ModPost::Table, ModPost::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_post_post_id")
                            .from(ModPost::Table, ModPost::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_post").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_post").await?;

        manager
            .drop_table(Table::drop().table(ModPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModPost {
    Table,
    ModId,
    PostId,
    CreatedAt,
    UpdatedAt,
}
