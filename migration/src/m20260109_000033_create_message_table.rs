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
                    .table(Message::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Message::Id))
                    .col(common::created_at(Message::CreatedAt))
                    .col(common::updated_at(Message::UpdatedAt))
                    .col(common::is_active(Message::IsActive))
                    .col(timestamp_null(Message::SentAt))
                    .col(timestamp_null(Message::ReceivedAt))
                    .col(timestamp_null(Message::ReadAt))
                    .col(text(Message::Content))
                    .col(uuid(Message::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_user_id")
                            .from(Message::Table, Message::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "message").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "message").await?;

        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    SentAt,
    ReceivedAt,
    ReadAt,
    Content,
    UserId,
}
