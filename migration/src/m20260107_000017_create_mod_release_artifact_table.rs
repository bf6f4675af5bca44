use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000016_create_mod_release_table::ModRelease;
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModReleaseArtifact::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(ModReleaseArtifact::Id))
                    .col(common::created_at(ModReleaseArtifact::CreatedAt))
                    .col(common::updated_at(ModReleaseArtifact::UpdatedAt))
                    .col(common::is_active(ModReleaseArtifact::IsActive))
                    .col(text(ModReleaseArtifact::Name))
                    .col(text(ModReleaseArtifact::Path))
                    .col(integer(ModReleaseArtifact::Size))
                    .col(string_len(ModReleaseArtifact::Checksum, 64))
                    .col(uuid(ModReleaseArtifact::ModReleaseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_artifact_mod_release_id")
                            .from(ModReleaseArtifact::Table, ModReleaseArtifact::ModReleaseId)
                            .to(ModRelease::Table, ModRelease::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_release_artifact").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_release_artifact").await?;

        manager
            .drop_table(Table::drop().table(ModReleaseArtifact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModReleaseArtifact {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Name,
    Path,
    Size,
    Checksum,
    ModReleaseId,
}
