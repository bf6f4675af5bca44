use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260106_000005_create_social_table::Social,
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
                    .table(UserSocial::Table)
                    .if_not_exists()
                    .col(uuid(UserSocial::UserId))
                    .col(uuid(UserSocial::SocialId))
                    .col(common::created_at(UserSocial::CreatedAt))
                    .col(common::updated_at(UserSocial::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserSocial::UserId)
                            .col(UserSocial::SocialId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_social_user_id")
                            .from(UserSocial::Table, UserSocial::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_social_social_id")
                            .from(UserSocial::Table, UserSocial::SocialId)
                            .to(Social::Table, Social::Id),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "user_social").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "user_social").await?;

        manager
            .drop_table(Table::drop().table(UserSocial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserSocial {
    Table,
    UserId,
    SocialId,
    CreatedAt,
    UpdatedAt,
}
