//! Name-to-id lookups against the controlled vocabulary tables.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct VocabularyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VocabularyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn model_type_id(&self, name: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::ModelType::find()
            .select_only()
            .column(entity::model_type::Column::Id)
            .filter(entity::model_type::Column::Name.eq(name))
            .into_tuple()
            .one(self.db)
            .await
    }

    pub async fn mathematical_representation_id(&self, name: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::MathematicalRepresentation::find()
            .select_only()
            .column(entity::mathematical_representation::Column::Id)
            .filter(entity::mathematical_representation::Column::Name.eq(name))
            .into_tuple()
            .one(self.db)
            .await
    }

    pub async fn file_format_id(&self, name: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::FileFormat::find()
            .select_only()
            .column(entity::file_format::Column::Id)
            .filter(entity::file_format::Column::Name.eq(name))
            .into_tuple()
            .one(self.db)
            .await
    }
}
