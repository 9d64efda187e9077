use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::{debug, error, warn};

use crate::server::{
    data::coverage::CoverageRepository,
    error::Error,
    model::{
        coverage::{Coverage, CoverageRow},
        form::FormData,
    },
    service::dependency,
};

pub struct CoverageService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> CoverageService<'a, C> {
    /// Creates a new instance of [`CoverageService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the spatial-temporal coverage group of a submission for a resource.
    ///
    /// Coverages are facts, not entities: every valid row is inserted as a new row even when
    /// an identical coverage already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Every non-blank row was saved
    /// - `Ok(false)` - A required array is missing, or at least one row failed its dependency
    ///   check or failed to save
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<bool, Error> {
        let Some(rows) = CoverageRow::parse_all(form) else {
            debug!(resource_id, "Coverage arrays missing from submission");
            return Ok(false);
        };

        let mut success = true;
        for (index, row) in rows.iter().enumerate() {
            if *row == CoverageRow::default() {
                continue;
            }

            let coverage = match dependency::check_coverage(index, row) {
                Ok(coverage) => coverage,
                Err(e) => {
                    warn!(resource_id, error = %e, "Rejected coverage");
                    success = false;
                    continue;
                }
            };

            if let Err(e) = self.save_row(resource_id, &coverage).await {
                error!(resource_id, row = index, error = %e, "Failed to save coverage");
                success = false;
            }
        }

        Ok(success)
    }

    async fn save_row(&self, resource_id: i32, coverage: &Coverage) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let coverage_repo = CoverageRepository::new(&txn);

        let coverage_id = coverage_repo.create(coverage).await?;
        coverage_repo
            .link_to_resource(resource_id, coverage_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
