mod save;

use geometa_test_utils::prelude::*;
use sea_orm::ConnectionTrait;
use serde_json::json;

use super::*;

fn submission(value: serde_json::Value) -> FormData {
    FormData::from_json(value).unwrap()
}

/// Linker failing every call, used to force a row failure after the author rows were written
struct FailingLinker;

impl AffiliationLinker for FailingLinker {
    async fn link<C: ConnectionTrait>(
        &self,
        _db: &C,
        _owner: AffiliationOwner,
        _affiliation: &str,
        _ror_ids: &str,
    ) -> Result<bool, Error> {
        Err(Error::InternalError("linker failure".to_string()))
    }
}
