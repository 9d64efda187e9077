use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::{debug, error, info};

use crate::server::{
    data::{resource::ResourceRepository, title::TitleRepository},
    error::Error,
    model::{form::FormData, resource::ResourceForm},
};

pub struct ResourceService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ResourceService<'a, C> {
    /// Creates a new instance of [`ResourceService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or updates the resource row of a submission together with its titles.
    ///
    /// A submission whose DOI matches an existing resource updates that resource in place:
    /// its titles, descriptions and every resource association are deleted first, so the
    /// groups saved afterwards replace the previous children instead of merging with them.
    /// Without a matching DOI a new resource is inserted. Everything happens in one
    /// transaction that is rolled back on any failure.
    ///
    /// # Arguments
    /// - `form` - Submission holding the resource fields and titles
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Id of the created or updated resource
    /// - `Ok(None)` - A required field or array is missing; nothing was written
    /// - `Err(Error::DbErr)` - A database operation failed; the transaction was rolled back
    pub async fn save(&self, form: &FormData) -> Result<Option<i32>, Error> {
        let resource = match ResourceForm::from_form(form) {
            Ok(resource) => resource,
            Err(e) => {
                debug!(error = %e, "Resource submission failed validation");
                return Ok(None);
            }
        };

        match self.persist(&resource).await {
            Ok(resource_id) => Ok(Some(resource_id)),
            Err(e) => {
                error!(doi = ?resource.doi, error = %e, "Failed to save resource, rolled back");
                Err(e)
            }
        }
    }

    async fn persist(&self, resource: &ResourceForm) -> Result<i32, Error> {
        let txn = self.db.begin().await?;
        let resource_repo = ResourceRepository::new(&txn);

        let existing = match &resource.doi {
            Some(doi) => resource_repo.find_by_doi(doi).await?,
            None => None,
        };

        let resource_id = match existing {
            Some(existing) => {
                let purged = resource_repo.purge_children(existing.id).await?;
                resource_repo.update(existing.id, resource).await?;
                info!(
                    resource_id = existing.id,
                    purged, "Updating existing resource"
                );
                existing.id
            }
            None => resource_repo.create(resource).await?.id,
        };

        TitleRepository::new(&txn)
            .create_many(resource_id, &resource.titles)
            .await?;

        txn.commit().await?;

        Ok(resource_id)
    }
}

#[cfg(test)]
mod tests;
