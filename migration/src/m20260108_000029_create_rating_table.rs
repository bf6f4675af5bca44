use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_user_table::User;
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("rating_type"))
                    .values([Alias::new("mod")])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Rating::Id))
                    .col(common::created_at(Rating::CreatedAt))
                    .col(common::updated_at(Rating::UpdatedAt))
                    .col(common::is_active(Rating::IsActive))
                    .col(enumeration(
                        Rating::Type,
                        Alias::new("rating_type"),
                        [Alias::new("mod")],
                    ))
                    .col(decimal_len(Rating::Rating, 3, 2))
                    .col(text(Rating::Content))
                    .col(uuid(Rating::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_user_id")
                            .from(Rating::Table, Rating::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "rating").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "rating").await?;

        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("rating_type")).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rating {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Type,
    Rating,
    Content,
    UserId,
}
