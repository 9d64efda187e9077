//! `SeaORM` Entity for the `Resource_has_Spatial_Temporal_Coverage` junction table
//!
//! Every coverage row belongs to exactly one link.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Resource_has_Spatial_Temporal_Coverage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub spatial_temporal_coverage_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource::Entity",
        from = "Column::ResourceId",
        to = "super::resource::Column::Id"
    )]
    Resource,
    #[sea_orm(
        belongs_to = "super::spatial_temporal_coverage::Entity",
        from = "Column::SpatialTemporalCoverageId",
        to = "super::spatial_temporal_coverage::Column::Id"
    )]
    SpatialTemporalCoverage,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::spatial_temporal_coverage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpatialTemporalCoverage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
