use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000005_create_social_table::Social,
    m20260106_000007_create_host_publisher_table::HostPublisher,
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
                    .table(HostPublisherSocial::Table)
                    .if_not_exists()
                    .col(uuid(HostPublisherSocial::HostPublisherId))
                    .col(uuid(HostPublisherSocial::SocialId))
                    .col(common::created_at(HostPublisherSocial::CreatedAt))
                    .col(common::updated_at(HostPublisherSocial::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(HostPublisherSocial::HostPublisherId)
                            .col(HostPublisherSocial::SocialId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_host_publisher_social_host_publisher_id")
                            .from(
                                HostPublisherSocial::Table,
                                HostPublisherSocial::HostPublisherId,
                            )
                            .to(HostPublisher::Table, HostPublisher::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_host_publisher_social_social_id")
                            .from(HostPublisherSocial::Table, HostPublisherSocial::SocialId)
                            .to(Social::Table, Social::Id),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "host_publisher_social").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "host_publisher_social").await?;

        manager
            .drop_table(Table::drop().table(HostPublisherSocial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HostPublisherSocial {
    Table,
    HostPublisherId,
    SocialId,
    CreatedAt,
    UpdatedAt,
}
