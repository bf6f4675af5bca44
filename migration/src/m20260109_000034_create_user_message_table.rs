use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260109_000033_create_message_table::Message,
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
                    .table(UserMessage::Table)
                    .if_not_exists()
                    .col(uuid(UserMessage::UserId))
                    .col(uuid(UserMessage::MessageId))
                    .col(common::created_at(UserMessage::CreatedAt))
                    .col(common::updated_at(UserMessage::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserMessage::UserId)
                            .col(UserMessage::MessageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_message_user_id")
                            .from(UserMessage::Table, UserMessage::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_message_message_id")
                            .from(UserMessage::Table, UserMessage::MessageId)
                            .to(Message::Table, Message::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "user_message").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "user_message").await?;

        manager
            .drop_table(Table::drop().table(UserMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserMessage {
    Table,
    UserId,
    MessageId,
    CreatedAt,
    UpdatedAt,
}
