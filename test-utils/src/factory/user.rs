//! User factory for creating test user entities.
//!
//! Provides factory methods for creating user entities with sensible defaults,
//! reducing boilerplate in tests. The factory supports customization through a
//! builder pattern.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

use crate::factory::helpers::{next_seq, now};

/// The plaintext password every factory-built user can authenticate with.
pub const TEST_USER_PASSWORD: &str = "correct-horse-battery-staple";

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .display_name("custom-user")
///     .deactivated()
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    display_name: String,
    password: String,
    is_active: bool,
    is_anonymous: bool,
    verified: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with unique default identity fields.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let seq = next_seq();
        Self {
            db,
            email: format!("user{seq}@example.com"),
            display_name: format!("user-{seq}"),
            password: TEST_USER_PASSWORD.to_string(),
            is_active: true,
            is_anonymous: false,
            verified: true,
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn display_name(mut self, display_name: &str) -> Self {
        self.display_name = display_name.to_string();
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// Marks the user as soft-deactivated.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    /// Leaves `verified_at` unset.
    pub fn unverified(mut self) -> Self {
        self.verified = false;
        self
    }

    /// Inserts the user and returns the created entity model.
    ///
    /// The password is hashed the same way the application hashes it, so tests
    /// can authenticate the factory user with the plaintext value.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("failed to hash factory password: {e}")))?
            .to_string();

        let timestamp = now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(timestamp),
            updated_at: ActiveValue::Set(timestamp),
            is_active: ActiveValue::Set(self.is_active),
            verified_at: ActiveValue::Set(self.verified.then_some(timestamp)),
            authenticated_at: ActiveValue::Set(None),
            born_on: ActiveValue::Set(None),
            is_anonymous: ActiveValue::Set(self.is_anonymous),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(password_hash),
            given_name: ActiveValue::Set(None),
            family_name: ActiveValue::Set(None),
            display_name: ActiveValue::Set(self.display_name),
            bio: ActiveValue::Set(None),
            avatar_image: ActiveValue::Set(None),
            status_emoji: ActiveValue::Set(None),
            status: ActiveValue::Set(None),
            preferences: ActiveValue::Set(json!({})),
        }
        .insert(self.db)
        .await
    }
}
