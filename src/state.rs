//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool handle and the token
//! service is reference-counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::security::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Token service for issuing and verifying bearer tokens.
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: Arc<TokenService>) -> Self {
        Self { db, tokens }
    }
}
