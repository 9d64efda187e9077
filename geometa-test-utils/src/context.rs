//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context wraps an
//! in-memory SQLite database which either holds a handful of tables created straight from
//! entities, or the full migrated schema including the seeded vocabularies.

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    PaginatorTrait,
};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Most tests should create this via [`TestBuilder`](crate::TestBuilder) or one of the setup
/// macros rather than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_schema().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let resource = test.resource().insert_mock_resource(Some("10.1234/abc")).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Run every migration, creating the full schema and the seeded vocabularies.
    pub async fn with_schema(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }

    /// Count the rows of an entity's table
    pub async fn count<E>(&self, _entity: E) -> Result<u64, TestError>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        Ok(E::find().count(&self.db).await?)
    }
}
