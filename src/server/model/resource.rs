//! Top-level resource fields and titles.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::server::{error::validation::ValidationError, model::form::FormData};

/// Date format used by every date field of the form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Title text paired with its title type id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleEntry {
    pub text: String,
    pub title_type_id: i32,
}

/// Validated top-level resource fields
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceForm {
    pub doi: Option<String>,
    pub version: Option<f64>,
    pub year: i32,
    pub date_created: NaiveDate,
    pub date_embargo_until: Option<NaiveDate>,
    pub resource_type_id: i32,
    pub language_id: i32,
    pub rights_id: i32,
    /// Unique `(text, type)` pairs in submission order
    pub titles: Vec<TitleEntry>,
}

impl ResourceForm {
    /// Validates the required resource fields and collects the titles.
    ///
    /// Nothing is written when this fails; the orchestrator reports the submission as not
    /// saved.
    ///
    /// # Returns
    /// - `Ok(ResourceForm)` - All required scalars and title arrays are present and parse
    /// - `Err(ValidationError)` - A required field or array is missing or malformed
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let year = parse_required(form, "year")?;
        let date_created = parse_date(form, "dateCreated")?
            .ok_or(ValidationError::MissingField("dateCreated"))?;
        let resource_type_id = parse_required(form, "resourcetype")?;
        let language_id = parse_required(form, "language")?;
        let rights_id = parse_required(form, "rights")?;

        let titles = collect_titles(form)?;

        let version = match form.scalar("version") {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| ValidationError::InvalidValue {
                field: "version",
                reason: format!("{raw:?} is not a decimal number"),
            })?),
            None => None,
        };

        Ok(Self {
            doi: form.scalar("doi"),
            version,
            year,
            date_created,
            date_embargo_until: parse_date(form, "dateEmbargo")?,
            resource_type_id,
            language_id,
            rights_id,
            titles,
        })
    }
}

fn parse_required(form: &FormData, field: &'static str) -> Result<i32, ValidationError> {
    let raw = form
        .scalar(field)
        .ok_or(ValidationError::MissingField(field))?;

    raw.parse().map_err(|_| ValidationError::InvalidValue {
        field,
        reason: format!("{raw:?} is not an integer"),
    })
}

fn parse_date(form: &FormData, field: &'static str) -> Result<Option<NaiveDate>, ValidationError> {
    match form.scalar(field) {
        Some(raw) => NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::InvalidValue {
                field,
                reason: format!("{raw:?} is not a YYYY-MM-DD date"),
            }),
        None => Ok(None),
    }
}

/// Pairs `title[i]` with `titleType[i]`, dropping empty texts and repeated pairs
fn collect_titles(form: &FormData) -> Result<Vec<TitleEntry>, ValidationError> {
    if form.row_count("title") == 0 {
        return Err(ValidationError::MissingArray("title"));
    }
    if form.row_count("titleType") == 0 {
        return Err(ValidationError::MissingArray("titleType"));
    }

    let mut seen = HashSet::new();
    let mut titles = Vec::new();

    for i in 0..form.row_count("title") {
        let text = form.text_at("title", i);
        if text.is_empty() {
            continue;
        }

        let raw_type = form.text_at("titleType", i);
        let title_type_id = raw_type
            .parse()
            .map_err(|_| ValidationError::InvalidValue {
                field: "titleType",
                reason: format!("{raw_type:?} at row {i} is not a title type id"),
            })?;

        let entry = TitleEntry {
            text,
            title_type_id,
        };
        if seen.insert(entry.clone()) {
            titles.push(entry);
        }
    }

    if titles.is_empty() {
        return Err(ValidationError::MissingArray("title"));
    }

    Ok(titles)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn base() -> serde_json::Value {
        json!({
            "doi": "10.5880/GFZ.1.2.2024.001",
            "year": "2024",
            "dateCreated": "2024-03-01",
            "resourcetype": "1",
            "language": "1",
            "rights": "1",
            "version": "1.1",
            "title": ["A", "A", "B"],
            "titleType": ["1", "1", "2"],
        })
    }

    #[test]
    fn collapses_duplicate_title_pairs() {
        let resource = ResourceForm::from_form(&FormData::from_json(base()).unwrap()).unwrap();

        assert_eq!(
            resource.titles,
            vec![
                TitleEntry {
                    text: "A".to_string(),
                    title_type_id: 1
                },
                TitleEntry {
                    text: "B".to_string(),
                    title_type_id: 2
                },
            ]
        );
        assert_eq!(resource.version, Some(1.1));
        assert_eq!(resource.date_embargo_until, None);
    }

    #[test]
    fn same_text_with_other_type_is_kept() {
        let mut value = base();
        value["title"] = json!(["A", "A"]);
        value["titleType"] = json!(["1", "2"]);

        let resource = ResourceForm::from_form(&FormData::from_json(value).unwrap()).unwrap();

        assert_eq!(resource.titles.len(), 2);
    }

    #[test]
    fn missing_required_scalar_fails() {
        let mut value = base();
        value["rights"] = json!("");

        let result = ResourceForm::from_form(&FormData::from_json(value).unwrap());

        assert_eq!(result, Err(ValidationError::MissingField("rights")));
    }

    #[test]
    fn missing_title_types_fail() {
        let mut value = base();
        value.as_object_mut().unwrap().remove("titleType");

        let result = ResourceForm::from_form(&FormData::from_json(value).unwrap());

        assert_eq!(result, Err(ValidationError::MissingArray("titleType")));
    }

    #[test]
    fn malformed_date_fails() {
        let mut value = base();
        value["dateCreated"] = json!("01.03.2024");

        let result = ResourceForm::from_form(&FormData::from_json(value).unwrap());

        assert!(matches!(
            result,
            Err(ValidationError::InvalidValue {
                field: "dateCreated",
                ..
            })
        ));
    }
}
