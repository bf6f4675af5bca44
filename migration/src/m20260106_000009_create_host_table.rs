use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000007_create_host_publisher_table::HostPublisher;
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Host::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Host::Id))
                    .col(common::created_at(Host::CreatedAt))
                    .col(common::updated_at(Host::UpdatedAt))
                    .col(common::is_active(Host::IsActive))
                    .col(string_len_uniq(Host::Slug, 128))
                    .col(string_len(Host::Name, 64))
                    .col(text_null(Host::Description))
                    .col(string_len_null(Host::BannerImage, 255))
                    .col(string_len_null(Host::AvatarImage, 255))
                    .col(uuid(Host::HostPublisherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_host_host_publisher_id")
                            .from(Host::Table, Host::HostPublisherId)
                            .to(HostPublisher::Table, HostPublisher::Id),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "host").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "host").await?;

        manager
            .drop_table(Table::drop().table(Host::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Host {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Slug,
    Name,
    Description,
    BannerImage,
    AvatarImage,
    HostPublisherId,
}
