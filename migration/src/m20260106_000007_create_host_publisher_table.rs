use sea_orm_migration::{prelude::*, schema::*};

use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HostPublisher::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(HostPublisher::Id))
                    .col(common::created_at(HostPublisher::CreatedAt))
                    .col(common::updated_at(HostPublisher::UpdatedAt))
                    .col(common::is_active(HostPublisher::IsActive))
                    .col(string_len_uniq(HostPublisher::Slug, 128))
                    .col(string_len(HostPublisher::Name, 64))
                    .col(text_null(HostPublisher::Description))
                    .col(string_len_null(HostPublisher::BannerImage, 255))
                    .col(string_len_null(HostPublisher::AvatarImage, 255))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "host_publisher").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "host_publisher").await?;

        manager
            .drop_table(Table::drop().table(HostPublisher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HostPublisher {
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
}
