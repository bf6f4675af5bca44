//! Modhost API backend.
//!
//! Backend implementation for the mod hosting platform: API endpoints,
//! business logic, and data access. The backend uses Axum as the web framework
//! and SeaORM for database operations against PostgreSQL.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters, and API DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection, token service)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates via the guard, converts DTOs to params, calls a service
//! 3. **Service** executes business logic and orchestrates data operations
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model back to a DTO and builds the response
//!
//! Everything the database can enforce on its own — foreign keys, uniqueness,
//! cascade deletes, `updated_at` refreshes, and the category/comment hierarchy
//! columns — is enforced by the database, not application code.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
