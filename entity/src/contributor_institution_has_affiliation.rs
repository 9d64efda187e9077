//! `SeaORM` Entity for the `Contributor_Institution_has_Affiliation` junction table
//!
//! Affiliations of a contributing institution.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Contributor_Institution_has_Affiliation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contributor_institution_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub affiliation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contributor_institution::Entity",
        from = "Column::ContributorInstitutionId",
        to = "super::contributor_institution::Column::Id"
    )]
    ContributorInstitution,
    #[sea_orm(
        belongs_to = "super::affiliation::Entity",
        from = "Column::AffiliationId",
        to = "super::affiliation::Column::Id"
    )]
    Affiliation,
}

impl Related<super::contributor_institution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributorInstitution.def()
    }
}

impl Related<super::affiliation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Affiliation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
