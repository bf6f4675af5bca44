//! User account management and credential authentication.

use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserDto, CreateUserParams, User},
    service::security,
};

/// Display names are alphanumeric runs optionally joined by `-`, `_`, or `.`,
/// never starting or ending with a separator.
static DISPLAY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+(?:[-_.]*[a-zA-Z0-9])+$").unwrap());

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// Validates the display name, refuses identities that are already taken
    /// (including by soft-deactivated accounts), hashes the password, and
    /// inserts the row. The database's unique constraints remain the authority
    /// if a concurrent request slips past the pre-check.
    pub async fn create(&self, data: CreateUserDto) -> Result<User, AppError> {
        if !DISPLAY_NAME_PATTERN.is_match(&data.display_name) {
            return Err(AppError::BadRequest("Invalid display name".to_string()));
        }
        if !data.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.exists_by_email(&data.email).await? {
            return Err(AppError::BadRequest("Email is already in use".to_string()));
        }
        if repo.exists_by_display_name(&data.display_name).await? {
            return Err(AppError::BadRequest(
                "Display name is already in use".to_string(),
            ));
        }

        let password = security::hash_password(&data.password)?;
        let preferences = serde_json::to_value(data.preferences.unwrap_or_default())
            .map_err(|e| AppError::InternalError(format!("Failed to serialize preferences: {e}")))?;

        let user = repo
            .create(CreateUserParams {
                email: data.email,
                password,
                display_name: data.display_name,
                is_anonymous: data.is_anonymous.unwrap_or(false),
                born_on: data.born_on,
                given_name: data.given_name,
                family_name: data.family_name,
                bio: data.bio,
                preferences,
            })
            .await?;

        Ok(user)
    }

    /// Authenticates a user by login identifier (email or display name).
    ///
    /// Returns `None` for unknown identifiers, deactivated accounts, and wrong
    /// passwords alike. On success the user's `authenticated_at` timestamp is
    /// refreshed.
    pub async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_login_identifier(identifier).await? else {
            return Ok(None);
        };

        let Some(hashed) = repo.hashed_password(user.id).await? else {
            return Ok(None);
        };

        if !security::verify_password(password, &hashed) {
            return Ok(None);
        }

        repo.touch_authenticated_at(user.id).await?;

        Ok(Some(user))
    }

    /// Fetches a user by id, regardless of the soft-delete flag.
    pub async fn get_by_id(&self, id: uuid::Uuid) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_pattern_accepts_reasonable_names() {
        for name in ["modfan", "mod-fan", "mod_fan.2", "A1"] {
            assert!(DISPLAY_NAME_PATTERN.is_match(name), "{name} should match");
        }
    }

    #[test]
    fn display_name_pattern_rejects_separator_edges_and_symbols() {
        for name in ["-modfan", "modfan-", "mod fan", "m", "", "mod@fan"] {
            assert!(!DISPLAY_NAME_PATTERN.is_match(name), "{name} should not match");
        }
    }
}
