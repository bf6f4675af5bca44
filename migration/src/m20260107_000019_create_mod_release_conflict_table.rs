use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000014_create_mod_table::Mod,
    m20260107_000016_create_mod_release_table::ModRelease,
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
                    .table(ModReleaseConflict::Table)
                    .if_not_exists()
                    .col(uuid(ModReleaseConflict::ModReleaseId))
                    .col(uuid(ModReleaseConflict::ModId))
                    .col(text(ModReleaseConflict::VersionExpression))
                    .col(common::created_at(ModReleaseConflict::CreatedAt))
                    .col(common::updated_at(ModReleaseConflict::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(ModReleaseConflict::ModReleaseId)
                            .col(ModReleaseConflict::ModId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_conflict_mod_release_id")
                            .from(ModReleaseConflict::Table, ModReleaseConflict::ModReleaseId)
                            .to(ModRelease::Table, ModRelease::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_conflict_mod_id")
                            .from(ModReleaseConflict::Table, ModReleaseConflict::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_release_conflict").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_release_conflict").await?;

        manager
            .drop_table(Table::drop().table(ModReleaseConflict::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModReleaseConflict {
    Table,
    ModReleaseId,
    ModId,
    VersionExpression,
    CreatedAt,
    UpdatedAt,
}
