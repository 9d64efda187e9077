use thiserror::Error;

/// Structural problems with a submission, detected before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Missing required array field: {0}")]
    MissingArray(&'static str),
    #[error("Invalid value for field {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Row {row} of {group} failed dependency check: {reason}")]
    Dependency {
        group: &'static str,
        row: usize,
        reason: String,
    },
}
