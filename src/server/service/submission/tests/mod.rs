mod save;

use geometa_test_utils::prelude::*;
use serde_json::json;

use super::*;

fn submission(value: serde_json::Value) -> FormData {
    FormData::from_json(value).unwrap()
}

/// Complete submission whose second coverage row lies outside the latitude range
fn submission_with_bad_coverage(doi: &str) -> FormData {
    let mut value = form::complete_submission(doi);
    value["tscLatitudeMin"] = json!(["52.38", "95.0"]);
    value["tscLatitudeMax"] = json!(["52.42", ""]);
    value["tscLongitudeMin"] = json!(["13.06", "13.06"]);
    value["tscLongitudeMax"] = json!(["13.10", ""]);
    value["tscDescription"] = json!(["Potsdam", "Beyond the pole"]);
    value["tscDateStart"] = json!(["2020-01-01", "2020-01-01"]);
    value["tscDateEnd"] = json!(["2020-12-31", "2020-12-31"]);
    value["tscTimeStart"] = json!(["", ""]);
    value["tscTimeEnd"] = json!(["", ""]);
    value["tscTimezone"] = json!(["+01:00", "+01:00"]);

    submission(value)
}
