//! Host publisher / host / host release repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::host::{CreateHostParams, CreateHostPublisherParams, CreateHostReleaseParams};

pub struct HostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_publisher(
        &self,
        params: CreateHostPublisherParams,
    ) -> Result<entity::host_publisher::Model, DbErr> {
        let now = Utc::now().fixed_offset();

        entity::host_publisher::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            banner_image: ActiveValue::Set(None),
            avatar_image: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    pub async fn create_host(
        &self,
        params: CreateHostParams,
    ) -> Result<entity::host::Model, DbErr> {
        let now = Utc::now().fixed_offset();

        entity::host::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            banner_image: ActiveValue::Set(None),
            avatar_image: ActiveValue::Set(None),
            host_publisher_id: ActiveValue::Set(params.host_publisher_id),
        }
        .insert(self.db)
        .await
    }

    pub async fn create_release(
        &self,
        params: CreateHostReleaseParams,
    ) -> Result<entity::host_release::Model, DbErr> {
        let now = Utc::now().fixed_offset();

        entity::host_release::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            released_at: ActiveValue::Set(params.released_at.map(|at| at.fixed_offset())),
            version: ActiveValue::Set(params.version),
            description: ActiveValue::Set(params.description),
            host_id: ActiveValue::Set(params.host_id),
        }
        .insert(self.db)
        .await
    }

    /// Finds an active host by slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::host::Model>, DbErr> {
        entity::prelude::Host::find()
            .filter(entity::host::Column::Slug.eq(slug))
            .filter(entity::host::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Lists a host's active releases, most recent first.
    pub async fn releases(&self, host_id: Uuid) -> Result<Vec<entity::host_release::Model>, DbErr> {
        entity::prelude::HostRelease::find()
            .filter(entity::host_release::Column::HostId.eq(host_id))
            .filter(entity::host_release::Column::IsActive.eq(true))
            .order_by_desc(entity::host_release::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
