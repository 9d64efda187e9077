//! `SeaORM` Entity for the `Resource_has_Contributor_Institution` junction table
//!
//! Links a resource to contributing institutions.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Resource_has_Contributor_Institution")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub contributor_institution_id: i32,
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
        belongs_to = "super::contributor_institution::Entity",
        from = "Column::ContributorInstitutionId",
        to = "super::contributor_institution::Column::Id"
    )]
    ContributorInstitution,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::contributor_institution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributorInstitution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
