//! `SeaORM` Entity for contributing institutions

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Contributor_Institution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::contributor_institution_has_role::Relation::Role.def()
    }
    fn via() -> Option<RelationDef> {
        Some(
            super::contributor_institution_has_role::Relation::ContributorInstitution
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
