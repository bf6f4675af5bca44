use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{now, unique_slug};

/// Inserts a mod owned by the given user, targeting the given host.
pub async fn create_mod(
    db: &DatabaseConnection,
    user_id: Uuid,
    host_id: Uuid,
) -> Result<entity::mod_::Model, DbErr> {
    let timestamp = now();
    entity::mod_::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        slug: ActiveValue::Set(unique_slug("mod")),
        name: ActiveValue::Set("Test Mod".to_string()),
        description: ActiveValue::Set(None),
        banner_image: ActiveValue::Set(None),
        avatar_image: ActiveValue::Set(None),
        user_id: ActiveValue::Set(user_id),
        host_id: ActiveValue::Set(host_id),
        category_id: ActiveValue::Set(None),
        age_restriction_id: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
