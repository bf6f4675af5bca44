//! Token payloads and the OAuth2 token endpoint's request/response shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT payload structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
    /// Issued-at as a Unix timestamp.
    pub iat: i64,
    /// Scopes granted to this token.
    pub scopes: Vec<String>,
    /// Display name snapshot at issuance time.
    pub display_name: String,
}

/// Form payload of `POST /oauth2/token`.
///
/// `username` accepts either the email address or the display name; `scope`
/// is the usual space-delimited OAuth2 scope list.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequestDto {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub grant_type: Option<String>,
}

/// OAuth2 token response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}
