use sea_orm::ConnectionTrait;
use tracing::warn;

use crate::server::{
    data::affiliation::{AffiliationOwner, AffiliationRepository},
    error::Error,
    model::affiliation::AffiliationInput,
};

/// Attaches affiliations to authors and contributors
///
/// Savers call the linker inside the row's transaction, so `db` is whatever connection or
/// transaction the row is being written with.
#[allow(async_fn_in_trait)]
pub trait AffiliationLinker {
    /// Persists the affiliations described by the raw form text and links them to `owner`.
    ///
    /// # Returns
    /// - `Ok(true)` - Every affiliation was linked, or there was nothing to link
    /// - `Ok(false)` - The input could not be linked, e.g. a ROR id without a name
    /// - `Err(Error)` - A database operation failed
    async fn link<C: ConnectionTrait>(
        &self,
        db: &C,
        owner: AffiliationOwner,
        affiliation: &str,
        ror_ids: &str,
    ) -> Result<bool, Error>;
}

impl<T: AffiliationLinker> AffiliationLinker for &T {
    async fn link<C: ConnectionTrait>(
        &self,
        db: &C,
        owner: AffiliationOwner,
        affiliation: &str,
        ror_ids: &str,
    ) -> Result<bool, Error> {
        (**self).link(db, owner, affiliation, ror_ids).await
    }
}

/// Default linker storing `(name, ror_id)` rows in the `Affiliation` table
#[derive(Debug, Clone, Copy, Default)]
pub struct AffiliationService;

impl AffiliationLinker for AffiliationService {
    async fn link<C: ConnectionTrait>(
        &self,
        db: &C,
        owner: AffiliationOwner,
        affiliation: &str,
        ror_ids: &str,
    ) -> Result<bool, Error> {
        let input = AffiliationInput::parse(affiliation, ror_ids);
        if input.has_identifier_without_name() {
            warn!(?owner, "Refusing to link ROR id without an affiliation name");
            return Ok(false);
        }

        let affiliation_repo = AffiliationRepository::new(db);
        for (name, ror_id) in input.pairs() {
            let affiliation_id = affiliation_repo.resolve(name, ror_id).await?;
            affiliation_repo.link(owner, affiliation_id).await?;
        }

        Ok(true)
    }
}
