use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260109_000038_create_ban_table::Ban,
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
                    .table(UserBan::Table)
                    .if_not_exists()
                    .col(uuid(UserBan::UserId))
                    .col(uuid(UserBan::BanId))
                    .col(common::created_at(UserBan::CreatedAt))
                    .col(common::updated_at(UserBan::UpdatedAt))
                    .primary_key(Index::create().col(UserBan::UserId).col(UserBan::BanId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_ban_user_id")
                            .from(UserBan::Table, UserBan::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_ban_ban_id")
                            .from(UserBan::Table, UserBan::BanId)
                            .to(Ban::Table, Ban::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "user_ban").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "user_ban").await?;

        manager
            .drop_table(Table::drop().table(UserBan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBan {
    Table,
    UserId,
    BanId,
    CreatedAt,
    UpdatedAt,
}
