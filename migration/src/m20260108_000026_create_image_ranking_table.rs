use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260108_000022_create_image_table::Image,
    m20260108_000024_create_ranking_table::Ranking,
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
                    .table(ImageRanking::Table)
                    .if_not_exists()
                    .col(uuid(ImageRanking::ImageId))
                    .col(uuid(ImageRanking::RankingId))
                    .col(uuid(ImageRanking::UserId))
                    .col(common::created_at(ImageRanking::CreatedAt))
                    .col(common::updated_at(ImageRanking::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(ImageRanking::ImageId)
                            .col(ImageRanking::RankingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_ranking_image_id")
                            .from(ImageRanking::Table, ImageRanking::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_ranking_ranking_id")
                            .from(ImageRanking::Table, ImageRanking::RankingId)
                            .to(Ranking::Table, Ranking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_ranking_user_id")
                            .from(ImageRanking::Table, ImageRanking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uq_image_ranking_image_id_user_id")
                            .col(ImageRanking::ImageId)
                            .col(ImageRanking::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "image_ranking").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "image_ranking").await?;

        manager
            .drop_table(Table::drop().table(ImageRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ImageRanking {
    Table,
    ImageId,
    RankingId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
