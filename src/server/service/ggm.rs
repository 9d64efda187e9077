use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::debug;

use crate::server::{
    data::{
        ggm::GgmPropertiesRepository, resource::ResourceRepository,
        vocabulary::VocabularyRepository,
    },
    error::{ggm::GgmError, Error},
    model::{form::FormData, ggm::GgmForm},
};

pub struct GgmService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> GgmService<'a, C> {
    /// Creates a new instance of [`GgmService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the GGM properties of a resource, all or nothing.
    ///
    /// The properties row is keyed by its link to the resource rather than by content, so a
    /// second save for the same resource updates the same row. The model type, mathematical
    /// representation and file format are resolved against their vocabularies and written to
    /// the resource row.
    ///
    /// # Arguments
    /// - `resource_id` - Resource the properties belong to
    /// - `form` - Submission holding the GGM fields
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the GGM properties row
    /// - `Err(Error::GgmError)` - Validation failed, a vocabulary name is unknown or the resource
    ///   does not exist; nothing was written
    /// - `Err(Error::DbErr)` - A database operation failed; nothing was written
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<i32, Error> {
        let ggm = GgmForm::validate(form)?;

        let txn = self.db.begin().await?;
        let ggm_repo = GgmPropertiesRepository::new(&txn);

        let properties = match ggm_repo.find_by_resource_id(resource_id).await? {
            Some(existing) => ggm_repo.update(existing.id, &ggm.properties).await?,
            None => ggm_repo.create(resource_id, &ggm.properties).await?,
        };

        let vocabulary_repo = VocabularyRepository::new(&txn);
        let model_type_id = vocabulary_repo
            .model_type_id(&ggm.model_type)
            .await?
            .ok_or_else(|| unknown("Model_Type", &ggm.model_type))?;
        let mathematical_representation_id = vocabulary_repo
            .mathematical_representation_id(&ggm.mathematical_representation)
            .await?
            .ok_or_else(|| {
                unknown(
                    "Mathematical_Representation",
                    &ggm.mathematical_representation,
                )
            })?;
        let file_format_id = vocabulary_repo
            .file_format_id(&ggm.file_format)
            .await?
            .ok_or_else(|| unknown("File_Format", &ggm.file_format))?;

        let updated = ResourceRepository::new(&txn)
            .set_ggm_vocabulary(
                resource_id,
                model_type_id,
                mathematical_representation_id,
                file_format_id,
            )
            .await?;
        if !updated {
            return Err(GgmError::ResourceNotFound(resource_id).into());
        }

        txn.commit().await?;

        debug!(resource_id, ggm_properties_id = properties.id, "Saved GGM properties");

        Ok(properties.id)
    }
}

fn unknown(vocabulary: &'static str, name: &str) -> GgmError {
    GgmError::UnknownVocabulary {
        vocabulary,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests;
