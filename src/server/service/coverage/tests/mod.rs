mod save;

use chrono::{NaiveDate, NaiveTime};
use geometa_test_utils::prelude::*;
use serde_json::json;

use super::*;

fn submission(value: serde_json::Value) -> FormData {
    FormData::from_json(value).unwrap()
}
