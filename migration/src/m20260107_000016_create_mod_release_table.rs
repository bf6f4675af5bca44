use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000010_create_host_release_table::HostRelease,
    m20260107_000014_create_mod_table::Mod,
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
                    .table(ModRelease::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(ModRelease::Id))
                    .col(common::created_at(ModRelease::CreatedAt))
                    .col(common::updated_at(ModRelease::UpdatedAt))
                    .col(common::is_active(ModRelease::IsActive))
                    .col(text(ModRelease::Version))
                    .col(text_null(ModRelease::Description))
                    .col(integer(ModRelease::Size))
                    .col(string_len(ModRelease::Checksum, 64))
                    .col(uuid(ModRelease::ModId))
                    .col(uuid(ModRelease::HostReleaseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_mod_id")
                            .from(ModRelease::Table, ModRelease::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_host_release_id")
                            .from(ModRelease::Table, ModRelease::HostReleaseId)
                            .to(HostRelease::Table, HostRelease::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_release").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_release").await?;

        manager
            .drop_table(Table::drop().table(ModRelease::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModRelease {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Version,
    Description,
    Size,
    Checksum,
    ModId,
    HostReleaseId,
}
