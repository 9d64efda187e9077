use thiserror::Error;

/// Validation and vocabulary failures of the GGM properties saver.
///
/// Any of these aborts the whole save; nothing is written for the resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GgmError {
    #[error("Required GGM field {0} is missing or empty")]
    MissingField(&'static str),
    #[error("Model name {0:?} may only contain letters, digits, '_' and '-'")]
    InvalidModelName(String),
    #[error("Degree {0:?} is not a non-negative integer")]
    InvalidDegree(String),
    #[error("Field {field} exceeds the maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Value {value:?} is not allowed for field {field}")]
    NotAllowed { field: &'static str, value: String },
    #[error("No {vocabulary} entry named {name:?}")]
    UnknownVocabulary {
        vocabulary: &'static str,
        name: String,
    },
    #[error("Resource ID {0} does not exist")]
    ResourceNotFound(i32),
}
