use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_user_table::User, m20260106_000009_create_host_table::Host,
    m20260106_000011_create_category_table::Category,
    m20260106_000012_create_age_restriction_table::AgeRestriction,
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
                    .table(Mod::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Mod::Id))
                    .col(common::created_at(Mod::CreatedAt))
                    .col(common::updated_at(Mod::UpdatedAt))
                    .col(common::is_active(Mod::IsActive))
                    .col(string_len_uniq(Mod::Slug, 128))
                    .col(string_len(Mod::Name, 64))
                    .col(text_null(Mod::Description))
                    .col(string_len_null(Mod::BannerImage, 255))
                    .col(string_len_null(Mod::AvatarImage, 255))
                    .col(uuid(Mod::UserId))
                    .col(uuid(Mod::HostId))
                    .col(uuid_null(Mod::CategoryId))
                    .col(uuid_null(Mod::AgeRestrictionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_user_id")
                            .from(Mod::Table, Mod::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_host_id")
                            .from(Mod::Table, Mod::HostId)
                            .to(Host::Table, Host::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_category_id")
                            .from(Mod::Table, Mod::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_age_restriction_id")
                            .from(Mod::Table, Mod::AgeRestrictionId)
                            .to(AgeRestriction::Table, AgeRestriction::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .index(
                        Index::create()
                            .name("uq_mod_user_id_slug")
                            .col(Mod::UserId)
                            .col(Mod::Slug)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod").await?;

        manager
            .drop_table(Table::drop().table(Mod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mod {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    Slug,
    Name,
    Description,
    BannerImage,
    AvatarImage,
    UserId,
    HostId,
    CategoryId,
    AgeRestrictionId,
}
