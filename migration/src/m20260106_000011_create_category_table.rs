//! Category tree. Besides the usual base columns and trigger, this table gets
//! the `refresh_depth_and_lineage` trigger so the database maintains `depth`
//! and `lineage` whenever rows are inserted or re-parented.

use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("category_type"))
                    .values([Alias::new("mod")])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(Category::Id))
                    .col(common::created_at(Category::CreatedAt))
                    .col(common::updated_at(Category::UpdatedAt))
                    .col(common::is_active(Category::IsActive))
                    .col(uuid_null(Category::ParentId))
                    .col(enumeration(
                        Category::Type,
                        Alias::new("category_type"),
                        [Alias::new("mod")],
                    ))
                    .col(string_len(Category::Name, 64))
                    .col(text_null(Category::Description))
                    .col(integer(Category::Depth).default(0))
                    .col(
                        json_binary(Category::Lineage)
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_parent_id")
                            .from(Category::Table, Category::ParentId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uq_category_parent_id_name_type")
                            .col(Category::ParentId)
                            .col(Category::Name)
                            .col(Category::Type)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "category").await?;
        common::create_refresh_depth_and_lineage_trigger(manager, "category").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_depth_and_lineage_trigger(manager, "category").await?;
        common::drop_refresh_updated_at_trigger(manager, "category").await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("category_type")).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    ParentId,
    Type,
    Name,
    Description,
    Depth,
    Lineage,
}
