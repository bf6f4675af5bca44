use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{now, unique_slug};

/// Inserts a host publisher with a unique slug.
pub async fn create_publisher(
    db: &DatabaseConnection,
) -> Result<entity::host_publisher::Model, DbErr> {
    let timestamp = now();
    entity::host_publisher::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        slug: ActiveValue::Set(unique_slug("publisher")),
        name: ActiveValue::Set("Test Publisher".to_string()),
        description: ActiveValue::Set(None),
        banner_image: ActiveValue::Set(None),
        avatar_image: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Inserts a host owned by the given publisher.
pub async fn create_host(
    db: &DatabaseConnection,
    host_publisher_id: Uuid,
) -> Result<entity::host::Model, DbErr> {
    let timestamp = now();
    entity::host::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        slug: ActiveValue::Set(unique_slug("host")),
        name: ActiveValue::Set("Test Host".to_string()),
        description: ActiveValue::Set(None),
        banner_image: ActiveValue::Set(None),
        avatar_image: ActiveValue::Set(None),
        host_publisher_id: ActiveValue::Set(host_publisher_id),
    }
    .insert(db)
    .await
}

/// Inserts a host release with the given version.
pub async fn create_release(
    db: &DatabaseConnection,
    host_id: Uuid,
    version: &str,
) -> Result<entity::host_release::Model, DbErr> {
    let timestamp = now();
    entity::host_release::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        created_at: ActiveValue::Set(timestamp),
        updated_at: ActiveValue::Set(timestamp),
        is_active: ActiveValue::Set(true),
        released_at: ActiveValue::Set(Some(timestamp)),
        version: ActiveValue::Set(version.to_string()),
        description: ActiveValue::Set(None),
        host_id: ActiveValue::Set(host_id),
    }
    .insert(db)
    .await
}

/// Inserts a publisher and a host in one call, returning the host.
pub async fn create_host_with_publisher(
    db: &DatabaseConnection,
) -> Result<entity::host::Model, DbErr> {
    let publisher = create_publisher(db).await?;
    create_host(db, publisher.id).await
}
