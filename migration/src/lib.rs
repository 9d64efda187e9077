pub use sea_orm_migration::prelude::*;

pub mod seed;

mod util;

mod m20250601_000001_vocabulary;
mod m20250601_000002_resource;
mod m20250601_000003_affiliation;
mod m20250601_000004_author;
mod m20250601_000005_contributor;
mod m20250601_000006_funding_reference;
mod m20250601_000007_spatial_temporal_coverage;
mod m20250601_000008_ggm_properties;
mod m20250601_000009_external_links;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_vocabulary::Migration),
            Box::new(m20250601_000002_resource::Migration),
            Box::new(m20250601_000003_affiliation::Migration),
            Box::new(m20250601_000004_author::Migration),
            Box::new(m20250601_000005_contributor::Migration),
            Box::new(m20250601_000006_funding_reference::Migration),
            Box::new(m20250601_000007_spatial_temporal_coverage::Migration),
            Box::new(m20250601_000008_ggm_properties::Migration),
            Box::new(m20250601_000009_external_links::Migration),
        ]
    }
}
