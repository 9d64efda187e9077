//! `SeaORM` Entity for spatial-temporal coverage

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Spatial_Temporal_Coverage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub latitude_min: f64,
    pub latitude_max: Option<f64>,
    pub longitude_min: f64,
    pub longitude_max: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date_start: Date,
    pub date_end: Date,
    pub time_start: Option<Time>,
    pub time_end: Option<Time>,
    pub timezone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
