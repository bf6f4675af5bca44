use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260108_000024_create_ranking_table::Ranking,
    m20260108_000027_create_comment_table::Comment,
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
                    .table(CommentRanking::Table)
                    .if_not_exists()
                    .col(uuid(CommentRanking::CommentId))
                    .col(uuid(CommentRanking::RankingId))
                    .col(uuid(CommentRanking::UserId))
                    .col(common::created_at(CommentRanking::CreatedAt))
                    .col(common::updated_at(CommentRanking::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(CommentRanking::CommentId)
                            .col(CommentRanking::RankingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_ranking_comment_id")
                            .from(CommentRanking::Table, CommentRanking::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_ranking_ranking_id")
                            .from(CommentRanking::Table, CommentRanking::RankingId)
                            .to(Ranking::Table, Ranking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_ranking_user_id")
                            .from(CommentRanking::Table, CommentRanking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uq_comment_ranking_comment_id_user_id")
                            .col(CommentRanking::CommentId)
                            .col(CommentRanking::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "comment_ranking").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "comment_ranking").await?;

        manager
            .drop_table(Table::drop().table(CommentRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentRanking {
    Table,
    CommentId,
    RankingId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
