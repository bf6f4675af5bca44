//! Modhost Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! modhost application. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//!
//! Entity factories with sensible defaults live under `factory`.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```
//!
//! The schema is generated from the entity definitions, so the derived hierarchy
//! columns (`depth` / `lineage`) keep their inserted defaults here — the recursive
//! trigger that maintains them only exists on the PostgreSQL runtime schema.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
