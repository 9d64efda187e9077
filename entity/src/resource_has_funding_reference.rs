//! `SeaORM` Entity for the `Resource_has_Funding_Reference` junction table
//!
//! Funding references are shared between resources.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Resource_has_Funding_Reference")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub funding_reference_id: i32,
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
        belongs_to = "super::funding_reference::Entity",
        from = "Column::FundingReferenceId",
        to = "super::funding_reference::Column::Id"
    )]
    FundingReference,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::funding_reference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FundingReference.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
