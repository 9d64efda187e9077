use entity::description::DescriptionType;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct DescriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DescriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        resource_id: i32,
        description_type: DescriptionType,
        description: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::Description::insert(entity::description::ActiveModel {
            description_type: ActiveValue::Set(description_type),
            description: ActiveValue::Set(description.to_string()),
            resource_id: ActiveValue::Set(resource_id),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn get_by_resource_id(
        &self,
        resource_id: i32,
    ) -> Result<Vec<entity::description::Model>, DbErr> {
        entity::prelude::Description::find()
            .filter(entity::description::Column::ResourceId.eq(resource_id))
            .order_by_asc(entity::description::Column::Id)
            .all(self.db)
            .await
    }
}
