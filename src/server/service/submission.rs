//! Full submission pipeline.
//!
//! The resource is saved first and every form group is then saved against its id. In atomic
//! mode the whole pipeline shares one transaction and is rolled back unless every group
//! succeeds. Otherwise each saver commits on its own and the report shows which groups are
//! missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionSession, TransactionTrait};
use tracing::{error, info, warn};

use crate::server::{
    error::Error,
    model::{
        coverage::REQUIRED_COVERAGE_ARRAYS, form::FormData, ggm::GgmForm,
        report::SubmissionReport,
    },
    service::{
        author::AuthorService,
        contributor::{ContributorInstitutionService, ContributorPersonService},
        coverage::CoverageService,
        description::DescriptionService,
        funding_reference::FundingReferenceService,
        ggm::GgmService,
        resource::ResourceService,
    },
};

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
    atomic: bool,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new instance of [`SubmissionService`]
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `atomic` - Wrap the whole pipeline in one transaction
    pub fn new(db: &'a DatabaseConnection, atomic: bool) -> Self {
        Self { db, atomic }
    }

    /// Saves a complete submission.
    ///
    /// # Returns
    /// - `Ok(SubmissionReport)` - Outcome of the resource and of every group
    /// - `Err(Error::DbErr)` - Saving the resource row failed, or the atomic transaction could
    ///   not be opened or finished
    pub async fn save(&self, form: &FormData) -> Result<SubmissionReport, Error> {
        if !self.atomic {
            return run_pipeline(self.db, form).await;
        }

        let txn = self.db.begin().await?;
        let mut report = run_pipeline(&txn, form).await?;

        if report.is_complete() {
            txn.commit().await?;
        } else {
            txn.rollback().await?;
            if report.resource_id.is_some() {
                warn!(
                    resource_id = ?report.resource_id,
                    "Submission incomplete, rolled back every group"
                );
                report.rolled_back = true;
            }
        }

        Ok(report)
    }
}

async fn run_pipeline<C>(db: &C, form: &FormData) -> Result<SubmissionReport, Error>
where
    C: ConnectionTrait + TransactionTrait,
{
    let Some(resource_id) = ResourceService::new(db).save(form).await? else {
        return Ok(SubmissionReport::default());
    };

    let mut report = SubmissionReport {
        resource_id: Some(resource_id),
        ..Default::default()
    };

    report.descriptions = flag(
        "descriptions",
        resource_id,
        DescriptionService::new(db).save(resource_id, form).await,
    );
    report.authors = flag(
        "authors",
        resource_id,
        AuthorService::new(db).save(resource_id, form).await,
    );
    report.contributor_persons = flag(
        "contributor persons",
        resource_id,
        ContributorPersonService::new(db)
            .save(resource_id, form)
            .await,
    );
    report.contributor_institutions = flag(
        "contributor institutions",
        resource_id,
        ContributorInstitutionService::new(db)
            .save(resource_id, form)
            .await,
    );
    report.funding_references = flag(
        "funding references",
        resource_id,
        FundingReferenceService::new(db)
            .save(resource_id, form)
            .await,
    );

    let has_coverage = REQUIRED_COVERAGE_ARRAYS
        .iter()
        .any(|field| form.contains(field));
    report.spatial_temporal_coverage = if has_coverage {
        flag(
            "spatial temporal coverage",
            resource_id,
            CoverageService::new(db).save(resource_id, form).await,
        )
    } else {
        true
    };

    if GgmForm::is_present(form) {
        let saved = GgmService::new(db).save(resource_id, form).await.map(|_| true);
        report.ggm_properties = Some(flag("GGM properties", resource_id, saved));
    }

    info!(resource_id, complete = report.is_complete(), "Processed submission");

    Ok(report)
}

/// Collapses a saver result into its group flag, logging errors
fn flag(group: &str, resource_id: i32, result: Result<bool, Error>) -> bool {
    match result {
        Ok(saved) => saved,
        Err(e) => {
            error!(resource_id, group, error = %e, "Failed to save group");
            false
        }
    }
}

#[cfg(test)]
mod tests;
