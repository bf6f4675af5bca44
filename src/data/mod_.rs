//! Mod data repository.
//!
//! Creation with tags is a single transaction: the mod row and its `mod_tag`
//! rows either all land or none do.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::model::mod_::{CreateModParams, Mod, UpdateModParams};

pub struct ModRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a mod and its tag associations in one transaction.
    ///
    /// # Returns
    /// - `Ok(Mod)` - The created mod
    /// - `Err(DbErr)` - Database error; the transaction is rolled back and no
    ///   rows are written
    pub async fn create(&self, params: CreateModParams) -> Result<Mod, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now().fixed_offset();

        let entity = entity::mod_::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            banner_image: ActiveValue::Set(None),
            avatar_image: ActiveValue::Set(None),
            user_id: ActiveValue::Set(params.user_id),
            host_id: ActiveValue::Set(params.host_id),
            category_id: ActiveValue::Set(params.category_id),
            age_restriction_id: ActiveValue::Set(None),
        }
        .insert(&txn)
        .await?;

        for tag_id in params.tags {
            entity::mod_tag::ActiveModel {
                mod_id: ActiveValue::Set(entity.id),
                tag_id: ActiveValue::Set(tag_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Mod::from_entity(entity))
    }

    /// Finds a mod by id, regardless of the soft-delete flag.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mod>, DbErr> {
        let entity = entity::prelude::Mod::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Mod::from_entity))
    }

    /// Finds an active mod by slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Mod>, DbErr> {
        let entity = entity::prelude::Mod::find()
            .filter(entity::mod_::Column::Slug.eq(slug))
            .filter(entity::mod_::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Mod::from_entity))
    }

    /// Gets a user's active mods with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the mods
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of mods per page
    ///
    /// # Returns
    /// - `Ok((mods, total))` - The requested page and the total count of
    ///   matching rows across all pages
    pub async fn get_by_user_paginated(
        &self,
        user_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Mod>, u64), DbErr> {
        let paginator = entity::prelude::Mod::find()
            .filter(entity::mod_::Column::UserId.eq(user_id))
            .filter(entity::mod_::Column::IsActive.eq(true))
            .order_by_asc(entity::mod_::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let mods = entities.into_iter().map(Mod::from_entity).collect();

        Ok((mods, total))
    }

    /// Lists the tags attached to a mod.
    pub async fn tags(&self, mod_id: Uuid) -> Result<Vec<entity::tag::Model>, DbErr> {
        let rows = entity::prelude::ModTag::find()
            .filter(entity::mod_tag::Column::ModId.eq(mod_id))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, tag)| tag).collect())
    }

    /// Attaches a tag to a mod.
    pub async fn attach_tag(&self, mod_id: Uuid, tag_id: Uuid) -> Result<(), DbErr> {
        let now = Utc::now().fixed_offset();

        entity::mod_tag::ActiveModel {
            mod_id: ActiveValue::Set(mod_id),
            tag_id: ActiveValue::Set(tag_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Updates a mod's editable fields; `None` params leave fields unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Mod))` - The updated mod
    /// - `Ok(None)` - No mod with that id exists
    pub async fn update(&self, params: UpdateModParams) -> Result<Option<Mod>, DbErr> {
        let Some(existing) = entity::prelude::Mod::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::mod_::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(category_id) = params.category_id {
            active.category_id = ActiveValue::Set(category_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now().fixed_offset());

        let entity = active.update(self.db).await?;

        Ok(Some(Mod::from_entity(entity)))
    }

    /// Soft-deactivates a mod.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Mod::update_many()
            .filter(entity::mod_::Column::Id.eq(id))
            .col_expr(
                entity::mod_::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::mod_::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
