//! `SeaORM` Entity for funding references
//!
//! The full column tuple is the natural key; rows are shared between resources.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Funding_Reference")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub funder: String,
    pub funderid: Option<String>,
    pub funderidtyp: Option<String>,
    pub grantnumber: Option<String>,
    pub grantname: Option<String>,
    pub awarduri: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
