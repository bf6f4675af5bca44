use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_user_table::User;
use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ranking::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Ranking::Id))
                    .col(common::created_at(Ranking::CreatedAt))
                    .col(common::updated_at(Ranking::UpdatedAt))
                    .col(common::is_active(Ranking::IsActive))
                    .col(integer(Ranking::Rank))
                    .col(uuid(Ranking::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranking_user_id")
                            .from(Ranking::Table, Ranking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "ranking").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "ranking").await?;

        manager
            .drop_table(Table::drop().table(Ranking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ranking {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Rank,
    UserId,
}
