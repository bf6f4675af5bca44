//! Rating repository.
//!
//! A mod rating is two rows — the `rating` itself and the `mod_rating`
//! association pinning it to a mod version — written in one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use sea_orm::prelude::Decimal;
use uuid::Uuid;

/// Parameters for rating a mod at a specific version.
#[derive(Debug, Clone)]
pub struct RateModParams {
    pub mod_id: Uuid,
    pub user_id: Uuid,
    pub version: String,
    pub rating: Decimal,
    pub content: String,
}

pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a user's rating of a mod version.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created rating
    /// - `Err(DbErr)` - Database error, including the unique-constraint
    ///   violation when the user already rated this mod version; both rows are
    ///   rolled back
    pub async fn rate_mod(&self, params: RateModParams) -> Result<entity::rating::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now().fixed_offset();

        let rating = entity::rating::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            r#type: ActiveValue::Set(entity::rating::RatingType::Mod),
            rating: ActiveValue::Set(params.rating),
            content: ActiveValue::Set(params.content),
            user_id: ActiveValue::Set(params.user_id),
        }
        .insert(&txn)
        .await?;

        entity::mod_rating::ActiveModel {
            mod_id: ActiveValue::Set(params.mod_id),
            rating_id: ActiveValue::Set(rating.id),
            user_id: ActiveValue::Set(params.user_id),
            version: ActiveValue::Set(params.version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(rating)
    }

    /// Lists the active ratings attached to a mod.
    pub async fn for_mod(&self, mod_id: Uuid) -> Result<Vec<entity::rating::Model>, DbErr> {
        let rows = entity::prelude::ModRating::find()
            .filter(entity::mod_rating::Column::ModId.eq(mod_id))
            .find_also_related(entity::prelude::Rating)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, rating)| rating)
            .filter(|rating| rating.is_active)
            .collect())
    }
}
