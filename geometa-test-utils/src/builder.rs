//! Declarative test builder.
//!
//! The builder queues table creation, migrations and fixture rows, then executes all of them
//! in the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_schema: bool,

    // DOIs of resources to insert, `None` for a resource without DOI
    resources: Vec<Option<String>>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_schema: false,
            resources: Vec::new(),
        }
    }

    /// Run every migration during `build()`.
    ///
    /// Creates every table with its foreign keys and seeds the controlled vocabularies
    /// (resource types, languages, rights, title types, roles and the GGM vocabularies).
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_schema(mut self) -> Self {
        self.include_schema = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()` after the migrations. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geometa_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), geometa_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ResourceType)
    ///     .with_table(TitleType)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock resource into the database.
    ///
    /// Requires [`with_schema`](Self::with_schema) since the resource references seeded
    /// vocabulary rows.
    ///
    /// # Arguments
    /// - `doi` - DOI of the resource, `None` for a resource without DOI
    pub fn with_mock_resource(mut self, doi: Option<&str>) -> Self {
        self.resources.push(doi.map(str::to_string));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Runs the migrations if requested
    /// 2. Creates custom tables
    /// 3. Inserts mock resources
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Migration, table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        if self.include_schema {
            setup.with_schema().await?;
        }

        setup.with_tables(self.tables).await?;

        for doi in self.resources {
            setup.resource().insert_mock_resource(doi.as_deref()).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::*;

    use super::*;

    #[tokio::test]
    async fn test_builder_runs_migrations() -> Result<(), TestError> {
        let test = TestBuilder::new().with_schema().build().await?;

        assert!(test.count(ResourceType).await? > 0);
        assert!(test.count(Role).await? > 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_builder_chains_methods() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_schema()
            .with_mock_resource(Some("10.1234/first"))
            .with_mock_resource(None)
            .build()
            .await?;

        assert_eq!(test.count(Resource).await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_builder_creates_custom_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(TitleType).build().await?;

        assert_eq!(test.count(TitleType).await?, 0);

        Ok(())
    }
}
