use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::{error, warn};

use crate::server::{
    data::funding_reference::FundingReferenceRepository,
    error::Error,
    model::{form::FormData, funding_reference::FundingReferenceRow},
    service::dependency,
};

pub struct FundingReferenceService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> FundingReferenceService<'a, C> {
    /// Creates a new instance of [`FundingReferenceService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the funding reference group of a submission for a resource.
    ///
    /// Funding references are shared between resources: each row is resolved by its full
    /// natural key after normalizing the funder id, then linked to the resource if not already
    /// linked. Blank rows are no-ops.
    ///
    /// # Returns
    /// - `Ok(true)` - Every non-blank row was saved
    /// - `Ok(false)` - At least one row failed its dependency check or failed to save
    pub async fn save(&self, resource_id: i32, form: &FormData) -> Result<bool, Error> {
        let mut success = true;

        for (index, row) in FundingReferenceRow::parse_all(form).iter().enumerate() {
            if row.is_blank() {
                continue;
            }

            if let Err(e) = dependency::check_funding_reference(index, row) {
                warn!(resource_id, error = %e, "Rejected funding reference");
                success = false;
                continue;
            }

            match self.save_row(resource_id, row).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!(
                        resource_id,
                        row = index,
                        "Resource or funding reference vanished before linking"
                    );
                    success = false;
                }
                Err(e) => {
                    error!(
                        resource_id,
                        row = index,
                        error = %e,
                        "Failed to save funding reference"
                    );
                    success = false;
                }
            }
        }

        Ok(success)
    }

    async fn save_row(&self, resource_id: i32, row: &FundingReferenceRow) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let funding_reference_repo = FundingReferenceRepository::new(&txn);

        let funding_reference_id = funding_reference_repo
            .resolve(&row.to_reference())
            .await?;
        let linked = funding_reference_repo
            .link_to_resource(resource_id, funding_reference_id)
            .await?;

        if linked {
            txn.commit().await?;
        } else {
            txn.rollback().await?;
        }

        Ok(linked)
    }
}

#[cfg(test)]
mod tests;
