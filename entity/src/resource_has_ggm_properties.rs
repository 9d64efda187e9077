//! `SeaORM` Entity for the `Resource_has_GGM_Properties` junction table
//!
//! At most one GGM properties row per resource.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Resource_has_GGM_Properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_id: i32,
    #[sea_orm(unique)]
    pub ggm_properties_id: i32,
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
        belongs_to = "super::ggm_properties::Entity",
        from = "Column::GgmPropertiesId",
        to = "super::ggm_properties::Column::Id"
    )]
    GgmProperties,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::ggm_properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GgmProperties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
