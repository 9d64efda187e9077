mod purge_children;
mod replace_role_links;

use geometa_test_utils::prelude::*;

use crate::server::model::form::FormData;

use super::*;
