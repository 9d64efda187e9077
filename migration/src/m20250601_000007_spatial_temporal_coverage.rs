use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000002_resource::Resource, util::junction_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpatialTemporalCoverage::Table)
                    .if_not_exists()
                    .col(pk_auto(SpatialTemporalCoverage::Id))
                    .col(double(SpatialTemporalCoverage::LatitudeMin))
                    .col(double_null(SpatialTemporalCoverage::LatitudeMax))
                    .col(double(SpatialTemporalCoverage::LongitudeMin))
                    .col(double_null(SpatialTemporalCoverage::LongitudeMax))
                    .col(text(SpatialTemporalCoverage::Description))
                    .col(date(SpatialTemporalCoverage::DateStart))
                    .col(date(SpatialTemporalCoverage::DateEnd))
                    .col(time_null(SpatialTemporalCoverage::TimeStart))
                    .col(time_null(SpatialTemporalCoverage::TimeEnd))
                    .col(string(SpatialTemporalCoverage::Timezone))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(junction_table(
                ResourceHasSpatialTemporalCoverage::Table,
                ResourceHasSpatialTemporalCoverage::ResourceId,
                Resource::Table,
                Resource::Id,
                ResourceHasSpatialTemporalCoverage::SpatialTemporalCoverageId,
                SpatialTemporalCoverage::Table,
                SpatialTemporalCoverage::Id,
                (
                    "fk-resource_has_stc-resource_id",
                    "fk-resource_has_stc-spatial_temporal_coverage_id",
                ),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ResourceHasSpatialTemporalCoverage::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SpatialTemporalCoverage::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SpatialTemporalCoverage {
    #[sea_orm(iden = "Spatial_Temporal_Coverage")]
    Table,
    Id,
    LatitudeMin,
    LatitudeMax,
    LongitudeMin,
    LongitudeMax,
    Description,
    DateStart,
    DateEnd,
    TimeStart,
    TimeEnd,
    Timezone,
}

#[derive(DeriveIden, Clone, Copy)]
enum ResourceHasSpatialTemporalCoverage {
    #[sea_orm(iden = "Resource_has_Spatial_Temporal_Coverage")]
    Table,
    ResourceId,
    SpatialTemporalCoverageId,
}
