//! Comment repository. Shares the category tree's hierarchy-column handling.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::json;
use uuid::Uuid;

use crate::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment on a mod, optionally as a reply to another comment.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now().fixed_offset();

        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            parent_id: ActiveValue::Set(params.parent_id),
            content: ActiveValue::Set(params.content),
            depth: ActiveValue::Set(0),
            lineage: ActiveValue::Set(json!([])),
            user_id: ActiveValue::Set(params.user_id),
            mod_id: ActiveValue::Set(params.mod_id),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Lists a mod's active comments in posting order.
    pub async fn for_mod(&self, mod_id: Uuid) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ModId.eq(mod_id))
            .filter(entity::comment::Column::IsActive.eq(true))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Soft-deactivates a comment, e.g. for moderation.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .col_expr(
                entity::comment::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::comment::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
