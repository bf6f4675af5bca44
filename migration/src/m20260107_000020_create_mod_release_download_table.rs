use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260107_000014_create_mod_table::Mod,
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
                    .table(ModReleaseDownload::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(ModReleaseDownload::Id))
                    .col(common::created_at(ModReleaseDownload::CreatedAt))
                    .col(common::updated_at(ModReleaseDownload::UpdatedAt))
                    .col(
                        timestamp_with_time_zone(ModReleaseDownload::DownloadedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_len(ModReleaseDownload::Ip, 45))
                    .col(
                        json_binary(ModReleaseDownload::Headers)
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(uuid_null(ModReleaseDownload::ModReleaseId))
                    .col(uuid(ModReleaseDownload::ModId))
                    .col(uuid_null(ModReleaseDownload::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_download_mod_release_id")
                            .from(ModReleaseDownload::Table, ModReleaseDownload::ModReleaseId)
                            .to(ModRelease::Table, ModRelease::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_download_mod_id")
                            .from(ModReleaseDownload::Table, ModReleaseDownload::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_release_download_user_id")
                            .from(ModReleaseDownload::Table, ModReleaseDownload::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_release_download").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_release_download").await?;

        manager
            .drop_table(Table::drop().table(ModReleaseDownload::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModReleaseDownload {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DownloadedAt,
    Ip,
    Headers,
    ModReleaseId,
    ModId,
    UserId,
}
