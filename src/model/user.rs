//! User domain models, operation parameters, and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-user preference document stored as JSONB.
///
/// Unknown keys in the stored document are dropped on read; missing keys take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPreferences {
    pub show_nsfw: bool,
}

/// User account domain model.
///
/// Never carries the password hash; authentication code fetches the hash
/// separately so it stays out of every other code path.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub is_active: bool,
    pub is_anonymous: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub authenticated_at: Option<DateTime<Utc>>,
    pub born_on: Option<NaiveDate>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub bio: Option<String>,
    pub preferences: UserPreferences,
}

impl User {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let preferences =
            serde_json::from_value(entity.preferences).unwrap_or_default();

        Self {
            id: entity.id,
            email: entity.email,
            display_name: entity.display_name,
            is_active: entity.is_active,
            is_anonymous: entity.is_anonymous,
            verified_at: entity.verified_at.map(|at| at.with_timezone(&Utc)),
            authenticated_at: entity.authenticated_at.map(|at| at.with_timezone(&Utc)),
            born_on: entity.born_on,
            given_name: entity.given_name,
            family_name: entity.family_name,
            bio: entity.bio,
            preferences,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            is_active: self.is_active,
            is_anonymous: self.is_anonymous,
            verified_at: self.verified_at,
            authenticated_at: self.authenticated_at,
            born_on: self.born_on,
            given_name: self.given_name,
            family_name: self.family_name,
            bio: self.bio,
            preferences: self.preferences,
        }
    }
}

/// Parameters for creating a user row.
///
/// `password` is the already-hashed credential; hashing happens in the service
/// layer before the parameters are handed to the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub is_anonymous: bool,
    pub born_on: Option<NaiveDate>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub bio: Option<String>,
    pub preferences: Value,
}

/// Public representation of a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub is_active: bool,
    pub is_anonymous: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub authenticated_at: Option<DateTime<Utc>>,
    pub born_on: Option<NaiveDate>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub bio: Option<String>,
    pub preferences: UserPreferences,
}

/// JSON payload of `POST /users/`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub display_name: String,
    pub password: String,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
    #[serde(default)]
    pub born_on: Option<NaiveDate>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}
