/// Create a [`TestContext`](crate::TestContext) holding only the given entity tables.
///
/// Foreign keys are enforced by SQLite, so only use this for tables without references or
/// together with every table they reference.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Create a [`TestContext`](crate::TestContext) with the migrated schema and seeded
/// vocabularies.
#[macro_export]
macro_rules! test_setup_with_schema {
    () => {{
        async {
            let setup = TestContext::new().await?;
            setup.with_schema().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
