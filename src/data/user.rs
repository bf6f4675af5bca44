//! User data repository for database operations.
//!
//! Handles user creation, lookups by the login identifiers, credential hash
//! retrieval, and the soft-delete flag, with conversion between entity models
//! and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::model::user::{CreateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// The id and timestamps are assigned here; `verified_at` starts unset and
    /// the account starts active.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique-constraint violations
    ///   on `email` / `display_name`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now().fixed_offset();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            verified_at: ActiveValue::Set(None),
            authenticated_at: ActiveValue::Set(None),
            born_on: ActiveValue::Set(params.born_on),
            is_anonymous: ActiveValue::Set(params.is_anonymous),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            given_name: ActiveValue::Set(params.given_name),
            family_name: ActiveValue::Set(params.family_name),
            display_name: ActiveValue::Set(params.display_name),
            bio: ActiveValue::Set(params.bio),
            avatar_image: ActiveValue::Set(None),
            status_emoji: ActiveValue::Set(None),
            status: ActiveValue::Set(None),
            preferences: ActiveValue::Set(params.preferences),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// Does not filter on `is_active` — callers that require an active user
    /// check the flag themselves (the auth guard turns it into a 400).
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an active user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an active user by display name.
    pub async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::DisplayName.eq(display_name))
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an active user by login identifier, trying email first and
    /// falling back to display name.
    pub async fn find_by_login_identifier(&self, identifier: &str) -> Result<Option<User>, DbErr> {
        if let Some(user) = self.find_by_email(identifier).await? {
            return Ok(Some(user));
        }

        self.find_by_display_name(identifier).await
    }

    /// Checks whether any user (active or not) holds the given email.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any user (active or not) holds the given display name.
    pub async fn exists_by_display_name(&self, display_name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::DisplayName.eq(display_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Fetches only the password hash for a user.
    ///
    /// Domain models never carry the hash; authentication is the one code path
    /// that needs it, so it is selected on its own here.
    pub async fn hashed_password(&self, id: Uuid) -> Result<Option<String>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .select_only()
            .column(entity::user::Column::Password)
            .into_tuple()
            .one(self.db)
            .await
    }

    /// Stamps the user's last successful authentication time.
    pub async fn touch_authenticated_at(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::AuthenticatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks the user's email address as verified.
    pub async fn mark_verified(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::VerifiedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Soft-deactivates a user.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
