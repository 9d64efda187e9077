use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{context::TestContext, error::TestError};

impl TestContext {
    pub fn resource<'a>(&'a self) -> ResourceFixtures<'a> {
        ResourceFixtures { setup: self }
    }
}

pub struct ResourceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ResourceFixtures<'a> {
    /// Insert a resource referencing the first seeded resource type, language and rights.
    ///
    /// Requires the migrated schema.
    pub async fn insert_mock_resource(
        &self,
        doi: Option<&str>,
    ) -> Result<entity::resource::Model, TestError> {
        Ok(
            entity::prelude::Resource::insert(entity::resource::ActiveModel {
                doi: ActiveValue::Set(doi.map(str::to_string)),
                version: ActiveValue::Set(Some(1.0)),
                year: ActiveValue::Set(2024),
                date_created: ActiveValue::Set(mock_date()),
                date_embargo_until: ActiveValue::Set(None),
                rights_id: ActiveValue::Set(1),
                resource_type_id: ActiveValue::Set(1),
                language_id: ActiveValue::Set(1),
                model_type_id: ActiveValue::Set(None),
                mathematical_representation_id: ActiveValue::Set(None),
                file_format_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

fn mock_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default()
}
