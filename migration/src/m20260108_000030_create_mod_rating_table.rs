use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260107_000014_create_mod_table::Mod,
    m20260108_000029_create_rating_table::Rating,
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
                    .table(ModRating::Table)
                    .if_not_exists()
                    .col(uuid(ModRating::ModId))
                    .col(uuid(ModRating::RatingId))
                    .col(uuid(ModRating::UserId))
                    .col(text(ModRating::Version))
                    .col(common::created_at(ModRating::CreatedAt))
                    .col(common::updated_at(ModRating::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(ModRating::ModId)
                            .col(ModRating::RatingId)
                            .col(ModRating::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_rating_mod_id")
                            .from(ModRating::Table, ModRating::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_rating_rating_id")
                            .from(ModRating::Table, ModRating::RatingId)
                            .to(Rating::Table, Rating::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_rating_user_id")
                            .from(ModRating::Table, ModRating::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uq_mod_rating_mod_id_user_id_version")
                            .col(ModRating::ModId)
                            .col(ModRating::UserId)
                            .col(ModRating::Version)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_rating").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_rating").await?;

        manager
            .drop_table(Table::drop().table(ModRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModRating {
    Table,
    ModId,
    RatingId,
    UserId,
    Version,
    CreatedAt,
    UpdatedAt,
}
