//! `SeaORM` Entity for the `Contributor_Person_has_Affiliation` junction table
//!
//! Affiliations of a contributing person.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Contributor_Person_has_Affiliation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contributor_person_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub affiliation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contributor_person::Entity",
        from = "Column::ContributorPersonId",
        to = "super::contributor_person::Column::Id"
    )]
    ContributorPerson,
    #[sea_orm(
        belongs_to = "super::affiliation::Entity",
        from = "Column::AffiliationId",
        to = "super::affiliation::Column::Id"
    )]
    Affiliation,
}

impl Related<super::contributor_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributorPerson.def()
    }
}

impl Related<super::affiliation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Affiliation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
