use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000014_create_mod_table::Mod, m20260109_000038_create_ban_table::Ban,
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
                    .table(ModBan::Table)
                    .if_not_exists()
                    .col(uuid(ModBan::ModId))
                    .col(uuid(ModBan::BanId))
                    .col(common::created_at(ModBan::CreatedAt))
                    .col(common::updated_at(ModBan::UpdatedAt))
                    .primary_key(Index::create().col(ModBan::ModId).col(ModBan::BanId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_ban_mod_id")
                            .from(ModBan::Table, ModBan::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_ban_ban_id")
                            .from(ModBan::Table, ModBan::BanId)
                            .to(Ban::Table, Ban::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_ban").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_ban").await?;

        manager
            .drop_table(Table::drop().table(ModBan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModBan {
    Table,
    ModId,
    BanId,
    CreatedAt,
    UpdatedAt,
}
