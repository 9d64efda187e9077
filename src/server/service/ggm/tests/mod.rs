
use geometa_test_utils::prelude::*;

use super::*;

fn submission(value: serde_json::Value) -> FormData {
    FormData::from_json(value).unwrap()
}
