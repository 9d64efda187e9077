use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::ggm::GgmProperties;

pub struct GgmPropertiesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GgmPropertiesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the GGM properties row linked to a resource, if any
    pub async fn find_by_resource_id(
        &self,
        resource_id: i32,
    ) -> Result<Option<entity::ggm_properties::Model>, DbErr> {
        let Some(link) = entity::prelude::ResourceHasGgmProperties::find_by_id(resource_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::GgmProperties::find_by_id(link.ggm_properties_id)
            .one(self.db)
            .await
    }

    /// Inserts a GGM properties row and links it to the resource
    pub async fn create(
        &self,
        resource_id: i32,
        properties: &GgmProperties,
    ) -> Result<entity::ggm_properties::Model, DbErr> {
        let created = active_model(properties).insert(self.db).await?;

        entity::prelude::ResourceHasGgmProperties::insert(
            entity::resource_has_ggm_properties::ActiveModel {
                resource_id: ActiveValue::Set(resource_id),
                ggm_properties_id: ActiveValue::Set(created.id),
            },
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(created)
    }

    /// Overwrites every column of an existing GGM properties row
    pub async fn update(
        &self,
        ggm_properties_id: i32,
        properties: &GgmProperties,
    ) -> Result<entity::ggm_properties::Model, DbErr> {
        let mut model = active_model(properties);
        model.id = ActiveValue::Unchanged(ggm_properties_id);

        model.update(self.db).await
    }
}

fn active_model(properties: &GgmProperties) -> entity::ggm_properties::ActiveModel {
    let properties = properties.clone();

    entity::ggm_properties::ActiveModel {
        model_name: ActiveValue::Set(properties.model_name),
        celestial_body: ActiveValue::Set(properties.celestial_body),
        product_type: ActiveValue::Set(properties.product_type),
        degree: ActiveValue::Set(properties.degree),
        errors: ActiveValue::Set(properties.errors),
        error_handling_approach: ActiveValue::Set(properties.error_handling_approach),
        tide_system: ActiveValue::Set(properties.tide_system),
        ..Default::default()
    }
}
