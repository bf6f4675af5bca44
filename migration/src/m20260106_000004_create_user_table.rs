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
                    .table(User::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(User::Id))
                    .col(common::created_at(User::CreatedAt))
                    .col(common::updated_at(User::UpdatedAt))
                    .col(common::is_active(User::IsActive))
                    .col(timestamp_with_time_zone_null(User::VerifiedAt))
                    .col(timestamp_with_time_zone_null(User::AuthenticatedAt))
                    .col(date_null(User::BornOn))
                    .col(boolean(User::IsAnonymous).default(false))
                    .col(string_len_uniq(User::Email, 255))
                    .col(string_len(User::Password, 128))
                    .col(string_len_null(User::GivenName, 64))
                    .col(string_len_null(User::FamilyName, 64))
                    .col(string_len_uniq(User::DisplayName, 64))
                    .col(text_null(User::Bio))
                    .col(string_len_null(User::AvatarImage, 64))
                    .col(string_len_null(User::StatusEmoji, 64))
                    .col(string_len_null(User::Status, 128))
                    .col(
                        json_binary(User::Preferences)
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "user").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "user").await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    VerifiedAt,
    AuthenticatedAt,
    BornOn,
    IsAnonymous,
    Email,
    Password,
    GivenName,
    FamilyName,
    DisplayName,
    Bio,
    AvatarImage,
    StatusEmoji,
    Status,
    Preferences,
}
