use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::resource::TitleEntry;

pub struct TitleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TitleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one title row per entry, in order
    pub async fn create_many(
        &self,
        resource_id: i32,
        titles: &[TitleEntry],
    ) -> Result<(), DbErr> {
        if titles.is_empty() {
            return Ok(());
        }

        let titles = titles.iter().map(|title| entity::title::ActiveModel {
            text: ActiveValue::Set(title.text.clone()),
            title_type_id: ActiveValue::Set(title.title_type_id),
            resource_id: ActiveValue::Set(resource_id),
            ..Default::default()
        });

        entity::prelude::Title::insert_many(titles)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_resource_id(
        &self,
        resource_id: i32,
    ) -> Result<Vec<entity::title::Model>, DbErr> {
        entity::prelude::Title::find()
            .filter(entity::title::Column::ResourceId.eq(resource_id))
            .order_by_asc(entity::title::Column::Id)
            .all(self.db)
            .await
    }
}
