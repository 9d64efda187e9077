use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use entity::resource_has_spatial_temporal_coverage as coverage_link;

use crate::server::model::coverage::Coverage;

pub struct CoverageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoverageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a coverage row; coverages are never deduplicated
    pub async fn create(&self, coverage: &Coverage) -> Result<i32, DbErr> {
        let coverage = coverage.clone();

        let result = entity::prelude::SpatialTemporalCoverage::insert(
            entity::spatial_temporal_coverage::ActiveModel {
                latitude_min: ActiveValue::Set(coverage.latitude_min),
                latitude_max: ActiveValue::Set(coverage.latitude_max),
                longitude_min: ActiveValue::Set(coverage.longitude_min),
                longitude_max: ActiveValue::Set(coverage.longitude_max),
                description: ActiveValue::Set(coverage.description),
                date_start: ActiveValue::Set(coverage.date_start),
                date_end: ActiveValue::Set(coverage.date_end),
                time_start: ActiveValue::Set(coverage.time_start),
                time_end: ActiveValue::Set(coverage.time_end),
                timezone: ActiveValue::Set(coverage.timezone),
                ..Default::default()
            },
        )
        .exec(self.db)
        .await?;

        Ok(result.last_insert_id)
    }

    pub async fn link_to_resource(&self, resource_id: i32, coverage_id: i32) -> Result<(), DbErr> {
        entity::prelude::ResourceHasSpatialTemporalCoverage::insert(
            coverage_link::ActiveModel {
                resource_id: ActiveValue::Set(resource_id),
                spatial_temporal_coverage_id: ActiveValue::Set(coverage_id),
            },
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn get_by_resource_id(
        &self,
        resource_id: i32,
    ) -> Result<Vec<entity::spatial_temporal_coverage::Model>, DbErr> {
        let ids: Vec<i32> = entity::prelude::ResourceHasSpatialTemporalCoverage::find()
            .select_only()
            .column(coverage_link::Column::SpatialTemporalCoverageId)
            .filter(coverage_link::Column::ResourceId.eq(resource_id))
            .into_tuple()
            .all(self.db)
            .await?;

        entity::prelude::SpatialTemporalCoverage::find()
            .filter(entity::spatial_temporal_coverage::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
