use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Supplied username/password pair did not match an active user.
    ///
    /// Covers unknown identifiers, wrong passwords, and soft-deactivated
    /// accounts alike so the response does not reveal which one failed.
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate` header.
    #[error("Incorrect login credentials")]
    InvalidCredentials,

    /// No bearer token was supplied on a protected endpoint.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or structural validation.
    #[error("Failed to decode JWT payload")]
    InvalidToken,

    /// The bearer token is past its `exp` claim.
    #[error("Bearer token has expired")]
    ExpiredToken,

    /// The token decoded cleanly but its subject no longer resolves to a user.
    #[error("Failed to get user by JWT identifier")]
    UnknownUser,

    /// The token is missing a scope the endpoint requires.
    ///
    /// Results in a 401 Unauthorized response whose `WWW-Authenticate` header
    /// names the missing scope.
    #[error("Missing necessary scope {0:?}")]
    MissingScope(String),

    /// The authenticated user is soft-deactivated.
    ///
    /// Business-rule violation rather than an authentication failure; results
    /// in a 400 Bad Request response.
    #[error("User {0} is not active")]
    InactiveUser(String),

    /// The authenticated user has not verified their email address.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User {0} is not verified")]
    UnverifiedUser(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Authentication and authorization failures map to 401 Unauthorized with a
/// `WWW-Authenticate: Bearer` challenge (naming the missing scope where one
/// applies); inactive/unverified-user business rules map to 400 Bad Request.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingScope(ref scope) => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    format!("Bearer scope={scope:?}"),
                )],
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials
            | Self::MissingToken
            | Self::InvalidToken
            | Self::ExpiredToken
            | Self::UnknownUser => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer".to_string())],
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InactiveUser(_) | Self::UnverifiedUser(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
