//! Category tree repository.
//!
//! Inserts write the hierarchy columns with their defaults (depth 0, empty
//! lineage); on PostgreSQL the `refresh_depth_and_lineage` trigger overwrites
//! both from the `parent_id` chain before the row lands.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::json;
use uuid::Uuid;

use crate::model::category::{Category, CreateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category under the given parent (or as a root).
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now().fixed_offset();

        let entity = entity::category::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            parent_id: ActiveValue::Set(params.parent_id),
            r#type: ActiveValue::Set(entity::category::CategoryType::Mod),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            depth: ActiveValue::Set(0),
            lineage: ActiveValue::Set(json!([])),
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Lists the active root categories, ordered by name.
    pub async fn roots(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.is_null())
            .filter(entity::category::Column::IsActive.eq(true))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Lists the active direct children of a category, ordered by name.
    pub async fn children(&self, parent_id: Uuid) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(parent_id))
            .filter(entity::category::Column::IsActive.eq(true))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Moves a category under a new parent (or to the root for `None`).
    ///
    /// On PostgreSQL the hierarchy trigger recomputes `depth` and `lineage`
    /// for the moved row as part of the update.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The moved category
    /// - `Ok(None)` - No category with that id exists
    pub async fn reparent(
        &self,
        id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = existing.into();
        active.parent_id = ActiveValue::Set(new_parent_id);
        active.updated_at = ActiveValue::Set(Utc::now().fixed_offset());

        let entity = active.update(self.db).await?;

        Ok(Some(Category::from_entity(entity)))
    }

    /// Soft-deactivates a category.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Category::update_many()
            .filter(entity::category::Column::Id.eq(id))
            .col_expr(
                entity::category::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::category::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
