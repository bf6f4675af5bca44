use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000014_create_mod_table::Mod, m20260108_000024_create_ranking_table::Ranking,
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
                    .table(ModRanking::Table)
                    .if_not_exists()
                    .col(uuid(ModRanking::ModId))
                    .col(uuid(ModRanking::RankingId))
                    .col(common::created_at(ModRanking::CreatedAt))
                    .col(common::updated_at(ModRanking::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(ModRanking::ModId)
                            .col(ModRanking::RankingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_ranking_mod_id")
                            .from(ModRanking::Table, ModRanking::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_ranking_ranking_id")
                            .from(ModRanking::Table, ModRanking::RankingId)
                            .to(Ranking::Table, Ranking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_ranking").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_ranking").await?;

        manager
            .drop_table(Table::drop().table(ModRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModRanking {
    Table,
    ModId,
    RankingId,
    CreatedAt,
    UpdatedAt,
}
