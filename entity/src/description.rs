//! `SeaORM` Entity for resource descriptions (abstract, methods, ...)

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum DescriptionType {
    #[sea_orm(string_value = "Abstract")]
    Abstract,
    #[sea_orm(string_value = "Methods")]
    Methods,
    #[sea_orm(string_value = "TechnicalInfo")]
    TechnicalInfo,
    #[sea_orm(string_value = "Other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Description")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description_type: DescriptionType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub resource_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource::Entity",
        from = "Column::ResourceId",
        to = "super::resource::Column::Id"
    )]
    Resource,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
