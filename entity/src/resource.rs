//! `SeaORM` Entity for the `Resource` aggregate root

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub doi: Option<String>,
    pub version: Option<f64>,
    pub year: i32,
    pub date_created: Date,
    pub date_embargo_until: Option<Date>,
    pub rights_id: i32,
    pub resource_type_id: i32,
    pub language_id: i32,
    pub model_type_id: Option<i32>,
    pub mathematical_representation_id: Option<i32>,
    pub file_format_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rights::Entity",
        from = "Column::RightsId",
        to = "super::rights::Column::Id"
    )]
    Rights,
    #[sea_orm(
        belongs_to = "super::resource_type::Entity",
        from = "Column::ResourceTypeId",
        to = "super::resource_type::Column::Id"
    )]
    ResourceType,
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::Id"
    )]
    Language,
    #[sea_orm(
        belongs_to = "super::model_type::Entity",
        from = "Column::ModelTypeId",
        to = "super::model_type::Column::Id"
    )]
    ModelType,
    #[sea_orm(
        belongs_to = "super::mathematical_representation::Entity",
        from = "Column::MathematicalRepresentationId",
        to = "super::mathematical_representation::Column::Id"
    )]
    MathematicalRepresentation,
    #[sea_orm(
        belongs_to = "super::file_format::Entity",
        from = "Column::FileFormatId",
        to = "super::file_format::Column::Id"
    )]
    FileFormat,
    #[sea_orm(has_many = "super::title::Entity")]
    Title,
    #[sea_orm(has_many = "super::description::Entity")]
    Description,
}

impl Related<super::rights::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rights.def()
    }
}

impl Related<super::resource_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceType.def()
    }
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Title.def()
    }
}

impl Related<super::description::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Description.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
