//! `SeaORM` Entity for contributing persons

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Contributor_Person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub familyname: String,
    pub givenname: String,
    pub orcid: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::contributor_person_has_role::Relation::Role.def()
    }
    fn via() -> Option<RelationDef> {
        Some(
            super::contributor_person_has_role::Relation::ContributorPerson
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
