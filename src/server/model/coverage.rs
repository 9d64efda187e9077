//! Spatial-temporal coverage rows.

use chrono::{NaiveDate, NaiveTime};

use crate::server::model::form::FormData;

/// Parallel arrays that must all be present for the coverage group to be processed
pub const REQUIRED_COVERAGE_ARRAYS: [&str; 6] = [
    "tscLatitudeMin",
    "tscLongitudeMin",
    "tscDescription",
    "tscDateStart",
    "tscDateEnd",
    "tscTimezone",
];

/// Coverage row as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageRow {
    pub latitude_min: String,
    pub latitude_max: String,
    pub longitude_min: String,
    pub longitude_max: String,
    pub description: String,
    pub date_start: String,
    pub date_end: String,
    pub time_start: String,
    pub time_end: String,
    pub timezone: String,
}

impl CoverageRow {
    /// Returns `None` when any of [`REQUIRED_COVERAGE_ARRAYS`] is missing or not an array
    pub fn parse_all(form: &FormData) -> Option<Vec<Self>> {
        if REQUIRED_COVERAGE_ARRAYS
            .iter()
            .any(|key| form.array(key).is_none())
        {
            return None;
        }

        let rows = (0..form.row_count("tscLatitudeMin"))
            .map(|i| Self {
                latitude_min: form.text_at("tscLatitudeMin", i),
                latitude_max: form.text_at("tscLatitudeMax", i),
                longitude_min: form.text_at("tscLongitudeMin", i),
                longitude_max: form.text_at("tscLongitudeMax", i),
                description: form.text_at("tscDescription", i),
                date_start: form.text_at("tscDateStart", i),
                date_end: form.text_at("tscDateEnd", i),
                time_start: form.text_at("tscTimeStart", i),
                time_end: form.text_at("tscTimeEnd", i),
                timezone: form.text_at("tscTimezone", i),
            })
            .collect();

        Some(rows)
    }
}

/// Coverage that passed its dependency check, with optional fields as `None`
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub latitude_min: f64,
    pub latitude_max: Option<f64>,
    pub longitude_min: f64,
    pub longitude_max: Option<f64>,
    pub description: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub time_start: Option<NaiveTime>,
    pub time_end: Option<NaiveTime>,
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_required_array_fails_group() {
        let form = FormData::from_json(json!({
            "tscLatitudeMin": ["52.38"],
            "tscLongitudeMin": ["13.06"],
            "tscDescription": ["Potsdam"],
            "tscDateStart": ["2020-01-01"],
            "tscDateEnd": ["2020-12-31"],
            "tscTimezone": "+00:00",
        }))
        .unwrap();

        assert!(CoverageRow::parse_all(&form).is_none());
    }

    #[test]
    fn optional_arrays_may_be_absent() {
        let form = FormData::from_json(json!({
            "tscLatitudeMin": ["52.38"],
            "tscLongitudeMin": ["13.06"],
            "tscDescription": ["Potsdam"],
            "tscDateStart": ["2020-01-01"],
            "tscDateEnd": ["2020-12-31"],
            "tscTimezone": ["+00:00"],
        }))
        .unwrap();

        let rows = CoverageRow::parse_all(&form).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].latitude_max, "");
        assert_eq!(rows[0].timezone, "+00:00");
    }
}
