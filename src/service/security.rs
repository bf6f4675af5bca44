//! Token issuance/verification and password hashing.

use std::fmt;
use std::str::FromStr;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{
    config::SecurityConfig,
    error::{auth::AuthError, config::ConfigError, AppError},
    model::{security::Claims, user::User},
};

/// The available OAuth2 scopes.
///
/// Constants rather than an enum so route and service code can use them
/// without conversion noise.
pub mod scopes {
    /// Read information about the current user.
    pub const ME: &str = "me";
}

/// Manages JWT access token issuance and verification.
pub struct TokenService {
    secret: String,
    algorithm: Algorithm,
    access_token_ttl: i64,
}

impl TokenService {
    /// Builds the token service from the security configuration, parsing the
    /// configured signing algorithm name.
    pub fn from_config(config: &SecurityConfig) -> Result<Self, AppError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            ConfigError::InvalidEnvVar(
                "APP_SECURITY_ALGORITHM".to_string(),
                config.algorithm.clone(),
            )
        })?;

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            access_token_ttl: config.access_token_ttl,
        })
    }

    /// Produces an access token for a user with the given scopes.
    ///
    /// The token carries the user id as its subject, issue/expiry timestamps
    /// based on the configured TTL, the granted scopes, and the display name.
    pub fn issue(&self, user: &User, scopes: &[String]) -> Result<String, AppError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            exp: now + self.access_token_ttl,
            iat: now,
            scopes: scopes.to_vec(),
            display_name: user.display_name.clone(),
        };

        encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to encode JWT: {e}")))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}

/// Hashes a plaintext password into the Argon2id PHC string format.
pub fn hash_password(plain_password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain_password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// An unparseable stored hash counts as a failed verification.
pub fn verify_password(plain_password: &str, hashed_password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hashed_password) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain_password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::model::user::{User, UserPreferences};

    fn token_service() -> TokenService {
        TokenService::from_config(&SecurityConfig {
            secret: "test-secret".to_string(),
            algorithm: "HS256".to_string(),
            access_token_ttl: 3600,
        })
        .unwrap()
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "tester@example.com".to_string(),
            display_name: "tester".to_string(),
            is_active: true,
            is_anonymous: false,
            verified_at: Some(Utc::now()),
            authenticated_at: None,
            born_on: None,
            given_name: None,
            family_name: None,
            bio: None,
            preferences: UserPreferences::default(),
        }
    }

    #[test]
    fn issued_token_claims_round_trip() {
        let tokens = token_service();
        let user = sample_user();

        let token = tokens
            .issue(&user, &[scopes::ME.to_string()])
            .expect("token issuance should succeed");
        let claims = tokens.verify(&token).expect("token should verify");

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.display_name, "tester");
        assert_eq!(claims.scopes, vec![scopes::ME.to_string()]);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn verify_rejects_foreign_signature() {
        let tokens = token_service();
        let other = TokenService::from_config(&SecurityConfig {
            secret: "a-different-secret".to_string(),
            algorithm: "HS256".to_string(),
            access_token_ttl: 3600,
        })
        .unwrap();

        let token = tokens.issue(&sample_user(), &[]).unwrap();

        assert!(matches!(
            other.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(matches!(
            token_service().verify("not-a-jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn invalid_algorithm_name_is_a_config_error() {
        let result = TokenService::from_config(&SecurityConfig {
            secret: "s".to_string(),
            algorithm: "ROT13".to_string(),
            access_token_ttl: 60,
        });

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar(_, _)))
        ));
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();

        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn verify_password_handles_malformed_hash() {
        assert!(!verify_password("hunter2", "definitely-not-a-phc-string"));
    }
}
