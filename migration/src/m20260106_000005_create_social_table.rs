use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("social_type"))
                    .values([
                        Alias::new("generic"),
                        Alias::new("twitter"),
                        Alias::new("patreon"),
                        Alias::new("github"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Social::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Social::Id))
                    .col(common::created_at(Social::CreatedAt))
                    .col(common::updated_at(Social::UpdatedAt))
                    .col(common::is_active(Social::IsActive))
                    .col(enumeration(
                        Social::Type,
                        Alias::new("social_type"),
                        [
                            Alias::new("generic"),
                            Alias::new("twitter"),
                            Alias::new("patreon"),
                            Alias::new("github"),
                        ],
                    ))
                    .col(text(Social::Url))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "social").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "social").await?;

        manager
            .drop_table(Table::drop().table(Social::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("social_type")).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Social {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Type,
    Url,
}
