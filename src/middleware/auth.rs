//! Bearer-token authentication guard.
//!
//! Controllers construct an [`AuthGuard`] per request and call the `require*`
//! method matching the endpoint's access rule. The guard decodes the bearer
//! token, checks the required scopes against the token's claims, and resolves
//! the subject to a user row.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::security::{scopes, TokenService},
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Resolves the request's bearer token to a user, requiring every listed
    /// scope to be present in the token's claims.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user (possibly deactivated)
    /// - `Err(AppError::AuthErr)` - Missing/invalid/expired token, missing
    ///   scope, or a subject that no longer resolves to a user
    pub async fn require(
        &self,
        headers: &HeaderMap,
        required_scopes: &[&str],
    ) -> Result<User, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        for scope in required_scopes {
            if !claims.scopes.iter().any(|granted| granted == scope) {
                return Err(AuthError::MissingScope(scope.to_string()).into());
            }
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        Ok(user)
    }

    /// Like [`AuthGuard::require`] with the `me` scope, additionally refusing
    /// soft-deactivated users with a 400.
    pub async fn require_active(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let user = self.require(headers, &[scopes::ME]).await?;

        if !user.is_active {
            return Err(AuthError::InactiveUser(user.display_name).into());
        }

        Ok(user)
    }

    /// Like [`AuthGuard::require_active`], additionally requiring a verified
    /// email address.
    pub async fn require_verified(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let user = self.require_active(headers).await?;

        if user.verified_at.is_none() {
            return Err(AuthError::UnverifiedUser(user.display_name).into());
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn bearer_token_extracts_the_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
