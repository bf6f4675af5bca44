use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Host, HostPublisher, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(HostPublisher)
///     .with_table(Host)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion
    /// order. Tables with foreign keys must be added after their targets.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for host operations: `HostPublisher`, `Host`,
    /// and `HostRelease`, in dependency order.
    pub fn with_host_tables(self) -> Self {
        self.with_table(HostPublisher)
            .with_table(Host)
            .with_table(HostRelease)
    }

    /// Adds all tables required for mod operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - HostPublisher / Host / HostRelease
    /// - Category, AgeRestriction, Tag
    /// - Mod, ModTag, ModRelease, ModReleaseArtifact
    ///
    /// Use this when testing mod-related functionality. Tests that also need
    /// ratings or comments should use `with_rating_tables()` /
    /// `with_comment_tables()` instead.
    pub fn with_mod_tables(self) -> Self {
        self.with_table(User)
            .with_host_tables()
            .with_table(Category)
            .with_table(AgeRestriction)
            .with_table(Tag)
            .with_table(Mod)
            .with_table(ModTag)
            .with_table(ModRelease)
            .with_table(ModReleaseArtifact)
    }

    /// Adds the mod tables plus `Rating` and `ModRating`.
    pub fn with_rating_tables(self) -> Self {
        self.with_mod_tables().with_table(Rating).with_table(ModRating)
    }

    /// Adds the mod tables plus `Comment`.
    pub fn with_comment_tables(self) -> Self {
        self.with_mod_tables().with_table(Comment)
    }

    /// Adds the tables required for notification operations: `User`,
    /// `Notification`, `UserNotification`, and `SiteNotification`.
    pub fn with_notification_tables(self) -> Self {
        self.with_table(User)
            .with_table(Notification)
            .with_table(UserNotification)
            .with_table(SiteNotification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`, in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
