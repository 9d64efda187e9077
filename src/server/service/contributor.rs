//! Contributor person and institution savers.
//!
//! Both follow the author saver's per-row loop. Each row additionally has to pass a dependency
//! check before anything is written, and after linking the contributor its complete role set
//! is replaced. Rows left entirely blank are skipped without counting as failures.

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::{error, warn};

use crate::server::{
    data::{
        affiliation::AffiliationOwner,
        contributor::{ContributorInstitutionRepository, ContributorPersonRepository},
        role::RoleOwner,
    },
    error::Error,
    model::{
        contributor::{ContributorInstitutionRow, ContributorPersonRow},
        form::FormData,
    },
    service::{
        affiliation::{AffiliationLinker, AffiliationService},
        dependency,
        role::{RoleService, RoleVocabulary},
    },
};

pub struct ContributorPersonService<'a, C, L = AffiliationService> {
    db: &'a C,
    linker: L,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ContributorPersonService<'a, C> {
    /// Creates a new instance of [`ContributorPersonService`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            linker: AffiliationService,
        }
    }
}

impl<'a, C, L> ContributorPersonService<'a, C, L>
where
    C: ConnectionTrait + TransactionTrait,
    L: AffiliationLinker,
{
    pub fn with_linker(db: &'a C, linker: L) -> Self {
        Self { db, linker }
    }

    /// Saves the contributor person group of a submission for a resource.
    ///
    /// # Returns
    /// - `Ok(true)` - Every non-blank row passed its dependency check and was saved
    /// - `Ok(false)` - At least one row failed its dependency check or failed to save
    /// - `Err(Error::DbErr)` - The role vocabulary could not be loaded
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<bool, Error> {
        let rows = ContributorPersonRow::parse_all(form);
        if rows.iter().all(ContributorPersonRow::is_blank) {
            return Ok(true);
        }

        let vocabulary = RoleVocabulary::load(self.db, RoleOwner::ContributorPerson).await?;

        let mut success = true;
        for (index, row) in rows.iter().enumerate() {
            if row.is_blank() {
                continue;
            }

            if let Err(e) = dependency::check_contributor_person(index, row) {
                warn!(resource_id, error = %e, "Rejected contributor person");
                success = false;
                continue;
            }

            if let Err(e) = self.save_row(resource_id, row, &vocabulary).await {
                error!(resource_id, row = index, error = %e, "Failed to save contributor person");
                success = false;
            }
        }

        Ok(success)
    }

    async fn save_row(
        &self,
        resource_id: i32,
        row: &ContributorPersonRow,
        vocabulary: &RoleVocabulary,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let contributor_repo = ContributorPersonRepository::new(&txn);

        let contributor_id = contributor_repo.resolve(&row.key()).await?;
        contributor_repo
            .link_to_resource(resource_id, contributor_id)
            .await?;

        RoleService::new(&txn)
            .replace_roles(contributor_id, &row.roles, vocabulary)
            .await?;

        if !row.affiliation.is_empty() {
            self.linker
                .link(
                    &txn,
                    AffiliationOwner::ContributorPerson(contributor_id),
                    &row.affiliation,
                    &row.ror_ids,
                )
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}

pub struct ContributorInstitutionService<'a, C, L = AffiliationService> {
    db: &'a C,
    linker: L,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ContributorInstitutionService<'a, C> {
    /// Creates a new instance of [`ContributorInstitutionService`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            linker: AffiliationService,
        }
    }
}

impl<'a, C, L> ContributorInstitutionService<'a, C, L>
where
    C: ConnectionTrait + TransactionTrait,
    L: AffiliationLinker,
{
    pub fn with_linker(db: &'a C, linker: L) -> Self {
        Self { db, linker }
    }

    /// Saves the contributor institution group of a submission for a resource.
    ///
    /// # Returns
    /// - `Ok(true)` - Every non-blank row passed its dependency check and was saved
    /// - `Ok(false)` - At least one row failed its dependency check or failed to save
    /// - `Err(Error::DbErr)` - The role vocabulary could not be loaded
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<bool, Error> {
        let rows = ContributorInstitutionRow::parse_all(form);
        if rows.iter().all(ContributorInstitutionRow::is_blank) {
            return Ok(true);
        }

        let vocabulary = RoleVocabulary::load(self.db, RoleOwner::ContributorInstitution).await?;

        let mut success = true;
        for (index, row) in rows.iter().enumerate() {
            if row.is_blank() {
                continue;
            }

            if let Err(e) = dependency::check_contributor_institution(index, row) {
                warn!(resource_id, error = %e, "Rejected contributor institution");
                success = false;
                continue;
            }

            if let Err(e) = self.save_row(resource_id, row, &vocabulary).await {
                error!(
                    resource_id,
                    row = index,
                    error = %e,
                    "Failed to save contributor institution"
                );
                success = false;
            }
        }

        Ok(success)
    }

    async fn save_row(
        &self,
        resource_id: i32,
        row: &ContributorInstitutionRow,
        vocabulary: &RoleVocabulary,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let contributor_repo = ContributorInstitutionRepository::new(&txn);

        let contributor_id = contributor_repo.resolve(&row.key()).await?;
        contributor_repo
            .link_to_resource(resource_id, contributor_id)
            .await?;

        RoleService::new(&txn)
            .replace_roles(contributor_id, &row.roles, vocabulary)
            .await?;

        if !row.affiliation.is_empty() {
            self.linker
                .link(
                    &txn,
                    AffiliationOwner::ContributorInstitution(contributor_id),
                    &row.affiliation,
                    &row.ror_ids,
                )
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
