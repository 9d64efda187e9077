use entity::description::DescriptionType;

use crate::server::{error::validation::ValidationError, model::form::FormData};

/// Free-text descriptions of a resource; only the abstract is required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionForm {
    pub entries: Vec<(DescriptionType, String)>,
}

impl DescriptionForm {
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let abstract_text = form
            .scalar("abstract")
            .ok_or(ValidationError::MissingField("abstract"))?;

        let mut entries = vec![(DescriptionType::Abstract, abstract_text)];
        for (field, description_type) in [
            ("methods", DescriptionType::Methods),
            ("TI", DescriptionType::TechnicalInfo),
            ("other", DescriptionType::Other),
        ] {
            if let Some(text) = form.scalar(field) {
                entries.push((description_type, text));
            }
        }

        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn collects_optional_descriptions() {
        let form = FormData::from_json(json!({
            "abstract": "Gravity field model",
            "methods": "",
            "TI": "ICGEM format",
        }))
        .unwrap();

        let descriptions = DescriptionForm::from_form(&form).unwrap();

        assert_eq!(
            descriptions.entries,
            vec![
                (DescriptionType::Abstract, "Gravity field model".to_string()),
                (DescriptionType::TechnicalInfo, "ICGEM format".to_string()),
            ]
        );
    }

    #[test]
    fn abstract_is_required() {
        let form = FormData::from_json(json!({ "abstract": " ", "methods": "GNSS" })).unwrap();

        assert_eq!(
            DescriptionForm::from_form(&form),
            Err(ValidationError::MissingField("abstract"))
        );
    }
}
