use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000009_create_host_table::Host;
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HostRelease::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(HostRelease::Id))
                    .col(common::created_at(HostRelease::CreatedAt))
                    .col(common::updated_at(HostRelease::UpdatedAt))
                    .col(common::is_active(HostRelease::IsActive))
                    .col(timestamp_with_time_zone_null(HostRelease::ReleasedAt))
                    .col(text(HostRelease::Version))
                    .col(text_null(HostRelease::Description))
                    .col(uuid(HostRelease::HostId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_host_release_host_id")
                            .from(HostRelease::Table, HostRelease::HostId)
                            .to(Host::Table, Host::Id),
                    )
                    .index(
                        Index::create()
                            .name("uq_host_release_host_id_version")
                            .col(HostRelease::HostId)
                            .col(HostRelease::Version)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "host_release").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "host_release").await?;

        manager
            .drop_table(Table::drop().table(HostRelease::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HostRelease {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    ReleasedAt,
    Version,
    Description,
    HostId,
}
