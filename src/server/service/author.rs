use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::{debug, error, warn};

use crate::server::{
    data::{affiliation::AffiliationOwner, author::AuthorRepository},
    error::Error,
    model::{
        affiliation::AffiliationInput,
        author::{AuthorForm, AuthorRow},
        form::FormData,
    },
    service::affiliation::{AffiliationLinker, AffiliationService},
};

pub struct AuthorService<'a, C, L = AffiliationService> {
    db: &'a C,
    linker: L,
}

impl<'a, C: ConnectionTrait + TransactionTrait> AuthorService<'a, C> {
    /// Creates a new instance of [`AuthorService`] using the default affiliation linker
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            linker: AffiliationService,
        }
    }
}

impl<'a, C, L> AuthorService<'a, C, L>
where
    C: ConnectionTrait + TransactionTrait,
    L: AffiliationLinker,
{
    /// Creates a new instance of [`AuthorService`] with a custom affiliation linker
    pub fn with_linker(db: &'a C, linker: L) -> Self {
        Self { db, linker }
    }

    /// Saves the author group of a submission for a resource.
    ///
    /// Each person and institution is resolved by its natural key, bound to an `Author` link
    /// row and linked to the resource, so saving the same authors twice writes nothing new.
    /// Every row is written in its own nested transaction.
    ///
    /// # Arguments
    /// - `resource_id` - Resource the authors belong to
    /// - `form` - Submission holding the author arrays
    ///
    /// # Returns
    /// - `Ok(true)` - Every retained row was saved
    /// - `Ok(false)` - No named author was submitted, or at least one row failed to save
    /// - `Err(Error::DbErr)` - A nested transaction could not be opened
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<bool, Error> {
        let authors = AuthorForm::from_form(form);
        if !authors.is_valid() {
            debug!(resource_id, "Submission contains no named author");
            return Ok(false);
        }

        let mut success = true;
        for (index, row) in authors.rows().enumerate() {
            if AffiliationInput::parse(&row.affiliation, &row.ror_ids).has_identifier_without_name()
            {
                warn!(
                    resource_id,
                    row = index,
                    "Skipping author with a ROR id but no affiliation"
                );
                continue;
            }

            if let Err(e) = self.save_row(resource_id, row).await {
                error!(resource_id, row = index, error = %e, "Failed to save author");
                success = false;
            }
        }

        Ok(success)
    }

    async fn save_row(&self, resource_id: i32, row: &AuthorRow) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let author_repo = AuthorRepository::new(&txn);

        let author_id = author_repo.resolve(&row.entity).await?;
        author_repo.link_to_resource(resource_id, author_id).await?;

        if !row.affiliation.is_empty() {
            let linked = self
                .linker
                .link(
                    &txn,
                    AffiliationOwner::Author(author_id),
                    &row.affiliation,
                    &row.ror_ids,
                )
                .await?;
            if !linked {
                warn!(resource_id, author_id, "Author affiliations were not linked");
            }
        }

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
