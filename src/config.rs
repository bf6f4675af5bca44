use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_ACCESS_TOKEN_TTL: i64 = 86_400;

/// Settings controlling token signing and lifetime.
pub struct SecurityConfig {
    pub secret: String,
    pub algorithm: String,
    pub access_token_ttl: i64,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub debug: bool,

    pub security: SecurityConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            debug: std::env::var("APP_DEBUG")
                .map(|value| matches!(value.as_str(), "1" | "true" | "True"))
                .unwrap_or(false),
            security: SecurityConfig {
                secret: std::env::var("APP_SECURITY_SECRET")
                    .map_err(|_| ConfigError::MissingEnvVar("APP_SECURITY_SECRET".to_string()))?,
                algorithm: std::env::var("APP_SECURITY_ALGORITHM")
                    .unwrap_or_else(|_| DEFAULT_ALGORITHM.to_string()),
                access_token_ttl: match std::env::var("APP_SECURITY_ACCESS_TOKEN_TTL") {
                    Ok(value) => value.parse().map_err(|_| {
                        ConfigError::InvalidEnvVar(
                            "APP_SECURITY_ACCESS_TOKEN_TTL".to_string(),
                            value,
                        )
                    })?,
                    Err(_) => DEFAULT_ACCESS_TOKEN_TTL,
                },
            },
        })
    }
}
