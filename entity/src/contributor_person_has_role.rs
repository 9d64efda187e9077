//! `SeaORM` Entity for the `Contributor_Person_has_Role` junction table
//!
//! Replaced as a whole on every save.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Contributor_Person_has_Role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contributor_person_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,
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
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
}

impl Related<super::contributor_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributorPerson.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
