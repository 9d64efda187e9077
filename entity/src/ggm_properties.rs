//! `SeaORM` Entity for Global Geopotential Model properties

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "GGM_Properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model_name: String,
    pub celestial_body: Option<String>,
    pub product_type: Option<String>,
    pub degree: Option<i32>,
    pub errors: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_handling_approach: Option<String>,
    pub tide_system: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
