//! `SeaORM` Entity for the `Author` link row
//!
//! Exactly one of `person_id` and `institution_id` is set.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub person_id: Option<i32>,
    pub institution_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author_person::Entity",
        from = "Column::PersonId",
        to = "super::author_person::Column::Id"
    )]
    AuthorPerson,
    #[sea_orm(
        belongs_to = "super::author_institution::Entity",
        from = "Column::InstitutionId",
        to = "super::author_institution::Column::Id"
    )]
    AuthorInstitution,
}

impl Related<super::author_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthorPerson.def()
    }
}

impl Related<super::author_institution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthorInstitution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
