//! Global Geopotential Model properties and their validation.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::server::{error::ggm::GgmError, model::form::FormData};

static MODEL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("model name pattern is a valid regex")
});

pub const MODEL_NAME_MAX_LEN: usize = 100;
pub const ERROR_HANDLING_APPROACH_MAX_LEN: usize = 5000;
pub const FILE_FORMAT_MAX_LEN: usize = 100;

pub const CELESTIAL_BODIES: &[&str] = &["Earth", "Moon", "Mars", "Venus", "Ceres", "Other"];
pub const PRODUCT_TYPES: &[&str] = &["gravity_field", "topography"];
pub const ERROR_KINDS: &[&str] = &["no", "calibrated", "formal", "calibrated_and_formal"];
pub const TIDE_SYSTEMS: &[&str] = &["mean_tide", "zero_tide", "tide_free", "unknown"];
pub const MATHEMATICAL_REPRESENTATIONS: &[&str] =
    &["Spherical harmonics", "Ellipsoidal harmonics"];

/// Validated GGM submission
///
/// `properties` is stored on the `GGM_Properties` row; the three vocabulary names are resolved
/// to foreign keys on the `Resource` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GgmForm {
    pub properties: GgmProperties,
    pub model_type: String,
    pub mathematical_representation: String,
    pub file_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GgmProperties {
    pub model_name: String,
    pub celestial_body: Option<String>,
    pub product_type: Option<String>,
    pub degree: Option<i32>,
    pub errors: Option<String>,
    pub error_handling_approach: Option<String>,
    pub tide_system: Option<String>,
}

impl GgmForm {
    /// Returns true when the submission carries a GGM group at all
    pub fn is_present(form: &FormData) -> bool {
        form.contains("model_name")
    }

    /// Validates the GGM fields of a submission.
    ///
    /// # Returns
    /// - `Ok(GgmForm)` - Every field passed validation; optional fields are trimmed and empty
    ///   values become `None`
    /// - `Err(GgmError)` - The first field that failed validation
    pub fn validate(form: &FormData) -> Result<Self, GgmError> {
        let model_name = required(form, "model_name")?;
        let model_type = required(form, "model_type")?;
        let mathematical_representation = required(form, "mathematical_representation")?;
        let file_format = required(form, "file_format")?;

        if !MODEL_NAME.is_match(&model_name) {
            return Err(GgmError::InvalidModelName(model_name));
        }
        max_len("model_name", &model_name, MODEL_NAME_MAX_LEN)?;
        max_len("file_format", &file_format, FILE_FORMAT_MAX_LEN)?;
        allowed(
            "mathematical_representation",
            &mathematical_representation,
            MATHEMATICAL_REPRESENTATIONS,
        )?;

        let error_handling_approach = form.scalar("error_handling_approach");
        if let Some(text) = &error_handling_approach {
            max_len(
                "error_handling_approach",
                text,
                ERROR_HANDLING_APPROACH_MAX_LEN,
            )?;
        }

        let celestial_body = optional_allowed(form, "celestial_body", CELESTIAL_BODIES)?;
        let product_type = optional_allowed(form, "product_type", PRODUCT_TYPES)?;
        let errors = optional_allowed(form, "errors", ERROR_KINDS)?;
        let tide_system = optional_allowed(form, "tide_system", TIDE_SYSTEMS)?;

        let degree = match form.scalar("degree") {
            Some(raw) => Some(
                raw.parse::<i32>()
                    .ok()
                    .filter(|degree| *degree >= 0)
                    .ok_or(GgmError::InvalidDegree(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            properties: GgmProperties {
                model_name,
                celestial_body,
                product_type,
                degree,
                errors,
                error_handling_approach,
                tide_system,
            },
            model_type,
            mathematical_representation,
            file_format,
        })
    }
}

fn required(form: &FormData, field: &'static str) -> Result<String, GgmError> {
    form.scalar(field).ok_or(GgmError::MissingField(field))
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), GgmError> {
    if value.chars().count() > max {
        return Err(GgmError::TooLong { field, max });
    }
    Ok(())
}

fn allowed(field: &'static str, value: &str, values: &[&str]) -> Result<(), GgmError> {
    if !values.contains(&value) {
        return Err(GgmError::NotAllowed {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn optional_allowed(
    form: &FormData,
    field: &'static str,
    values: &[&str],
) -> Result<Option<String>, GgmError> {
    match form.scalar(field) {
        Some(value) => {
            allowed(field, &value, values)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
