use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000014_create_mod_table::Mod, m20260108_000022_create_image_table::Image,
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
                    .table(ModImage::Table)
                    .if_not_exists()
                    .col(uuid(ModImage::ModId))
                    .col(uuid(ModImage::ImageId))
                    .col(common::created_at(ModImage::CreatedAt))
                    .col(common::updated_at(ModImage::UpdatedAt))
                    .primary_key(Index::create().col(ModImage::ModId).col(ModImage::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_image_mod_id")
                            .from(ModImage::Table, ModImage::ModId)
                            .to(Mod::Table, Mod::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_image_image_id")
                            .from(ModImage::Table, ModImage::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "mod_image").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "mod_image").await?;

        manager
            .drop_table(Table::drop().table(ModImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModImage {
    Table,
    ModId,
    ImageId,
    CreatedAt,
    UpdatedAt,
}
