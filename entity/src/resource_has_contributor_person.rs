//! `SeaORM` Entity for the `Resource_has_Contributor_Person` junction table
//!
//! Links a resource to contributing persons.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Resource_has_Contributor_Person")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub contributor_person_id: i32,
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
        belongs_to = "super::contributor_person::Entity",
        from = "Column::ContributorPersonId",
        to = "super::contributor_person::Column::Id"
    )]
    ContributorPerson,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::contributor_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributorPerson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
