//! Factory functions for submission documents.
//!
//! Each function returns the JSON fields of one form group with standard test values. Groups
//! are combined into a full submission with [`merge`]. The values reference the vocabulary
//! rows seeded by the migrations, so ids `1` and `2` are always valid.

use serde_json::{json, Map, Value};

/// Combine form groups into one submission document.
///
/// Later groups overwrite fields of earlier groups with the same name.
pub fn merge(groups: &[Value]) -> Value {
    let mut fields = Map::new();
    for group in groups {
        if let Value::Object(group) = group {
            fields.extend(group.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    Value::Object(fields)
}

/// Resource fields with a main title and a subtitle.
///
/// # Arguments
/// - `doi` - DOI of the resource, `None` to leave the field out
pub fn resource(doi: Option<&str>) -> Value {
    let mut value = json!({
        "year": "2024",
        "dateCreated": "2024-03-01",
        "resourcetype": "1",
        "language": "1",
        "rights": "1",
        "version": "1.0",
        "title": ["Global gravity field model", "Static solution"],
        "titleType": ["1", "3"],
    });
    if let Some(doi) = doi {
        value["doi"] = json!(doi);
    }

    value
}

/// Abstract and methods descriptions
pub fn descriptions() -> Value {
    json!({
        "abstract": "Combined satellite and terrestrial gravity field model.",
        "methods": "Least squares adjustment of normal equations.",
    })
}

/// One person author with ORCID and ROR affiliation, one institution author
pub fn authors() -> Value {
    json!({
        "familynames": ["Curie"],
        "givennames": ["Marie"],
        "orcids": ["0000-0002-1825-0097"],
        "personAffiliation": [r#"[{"value":"GFZ German Research Centre for Geosciences"}]"#],
        "authorPersonRorIds": ["04z8jg394"],
        "authorinstitutionName": ["Helmholtz Centre Potsdam"],
        "institutionAffiliation": [""],
        "authorInstitutionRorIds": [""],
    })
}

/// One contributor person with two roles and one contributor institution with one role
pub fn contributors() -> Value {
    json!({
        "cbPersonLastname": ["Noether"],
        "cbPersonFirstname": ["Emmy"],
        "cbORCID": [""],
        "cbAffiliation": [r#"["University of Göttingen"]"#],
        "cbpRorIds": [""],
        "cbPersonRoles": [r#"[{"value":"Data Curator"},{"value":"Researcher"}]"#],
        "cbOrganisationName": ["GFZ Data Services"],
        "OrganisationAffiliation": [""],
        "hiddenOrganisationRorId": [""],
        "cbOrganisationRoles": ["Data Curator"],
    })
}

/// One funding reference with a DOI style funder id
pub fn funding_references() -> Value {
    json!({
        "funder": ["National Science Foundation"],
        "funderId": ["https://doi.org/10.13039/100000001"],
        "grantNummer": ["EAR-1234567"],
        "grantName": ["Gravity field research"],
        "awardURI": [""],
    })
}

/// One spatial temporal coverage row
pub fn coverage() -> Value {
    json!({
        "tscLatitudeMin": ["52.38"],
        "tscLatitudeMax": ["52.42"],
        "tscLongitudeMin": ["13.06"],
        "tscLongitudeMax": ["13.10"],
        "tscDescription": ["Potsdam Telegrafenberg"],
        "tscDateStart": ["2020-01-01"],
        "tscDateEnd": ["2020-12-31"],
        "tscTimeStart": ["08:00"],
        "tscTimeEnd": ["17:30:00"],
        "tscTimezone": ["+01:00"],
    })
}

/// GGM properties referencing the seeded model type, representation and file format
///
/// # Arguments
/// - `model_name` - Name of the gravity field model
pub fn ggm(model_name: &str) -> Value {
    json!({
        "model_name": model_name,
        "model_type": "Static",
        "mathematical_representation": "Spherical harmonics",
        "file_format": "icgem1.0",
        "celestial_body": "Earth",
        "product_type": "gravity_field",
        "degree": "2190",
        "errors": "formal",
        "error_handling_approach": "Formal errors from the normal equations.",
        "tide_system": "tide_free",
    })
}

/// A submission holding every form group
pub fn complete_submission(doi: &str) -> Value {
    merge(&[
        resource(Some(doi)),
        descriptions(),
        authors(),
        contributors(),
        funding_references(),
        coverage(),
        ggm("EIGEN-6C4"),
    ])
}
