use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::debug;

use crate::server::{
    data::description::DescriptionRepository,
    error::Error,
    model::{description::DescriptionForm, form::FormData},
};

pub struct DescriptionService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> DescriptionService<'a, C> {
    /// Creates a new instance of [`DescriptionService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the abstract and the optional method, technical and other descriptions.
    ///
    /// # Returns
    /// - `Ok(true)` - Every submitted description was saved
    /// - `Ok(false)` - The abstract is missing; nothing was written
    /// - `Err(Error::DbErr)` - An insert failed; no description was kept
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<bool, Error> {
        let descriptions = match DescriptionForm::from_form(form) {
            Ok(descriptions) => descriptions,
            Err(e) => {
                debug!(resource_id, error = %e, "Descriptions failed validation");
                return Ok(false);
            }
        };

        let txn = self.db.begin().await?;
        let description_repo = DescriptionRepository::new(&txn);
        for (description_type, text) in &descriptions.entries {
            description_repo
                .create(resource_id, *description_type, text)
                .await?;
        }
        txn.commit().await?;

        Ok(true)
    }
}
