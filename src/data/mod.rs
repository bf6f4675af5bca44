//! Database repository layer for the platform's aggregates.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each aggregate in the application. Repositories use SeaORM
//! entity models internally and return domain models to maintain separation
//! between the data layer and business logic layer. Multi-row writes run
//! inside a transaction: commit on success, rollback on error.
//!
//! Queries on soft-deletable aggregates exclude `is_active = false` rows by
//! default; lookups by primary key do not, so callers can still inspect
//! deactivated records.

pub mod category;
pub mod comment;
pub mod host;
pub mod mod_;
pub mod notification;
pub mod rating;
pub mod user;

#[cfg(test)]
mod test;
