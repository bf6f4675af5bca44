use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000013_create_tag_table::Tag, m20260107_000014_create_mod_table::Mod,
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
                    .table(ModTag::Table)
                    .if_not_exists()
                    .col(uuid(ModTag::ModId))
                    .col(uuid(ModTag::TagId))
                    .col(common::created_at(ModTag::CreatedAt))
                    .col(common::updated_at(ModTag::UpdatedAt))
                    .primary_key(Index::create().col(ModTag::ModId).col(ModTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_tag_mod_id")
                            .from(ModTag::Table, ModTag::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_tag_tag_id")
                            .from(ModTag::Table, ModTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_tag").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_tag").await?;

        manager
            .drop_table(Table::drop().table(ModTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModTag {
    Table,
    ModId,
    TagId,
    CreatedAt,
    UpdatedAt,
}
