mod check_contributor;
mod check_coverage;
mod check_funding_reference;

use serde_json::json;

use super::*;

use crate::server::model::role::RoleNames;
