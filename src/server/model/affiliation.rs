use serde_json::Value;

const ROR_PREFIX: &str = "https://ror.org/";

/// Affiliation names paired positionally with their ROR ids
///
/// Affiliation text arrives either as a JSON array of `{"value": name}` tags or as a single
/// plain name. ROR ids arrive as comma-separated text where the i-th id belongs to the i-th
/// name; an empty slot means that affiliation has no id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffiliationInput {
    pub names: Vec<String>,
    pub ror_ids: Vec<Option<String>>,
}

impl AffiliationInput {
    pub fn parse(affiliation: &str, ror_ids: &str) -> Self {
        Self {
            names: parse_names(affiliation),
            ror_ids: ror_ids.split(',').map(normalize_ror_id).collect(),
        }
    }

    /// True when a ROR id was supplied without any affiliation name to carry it
    pub fn has_identifier_without_name(&self) -> bool {
        self.names.is_empty() && self.ror_ids.iter().any(Option::is_some)
    }

    /// `(name, ror_id)` pairs to persist
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.names.iter().enumerate().map(|(i, name)| {
            (
                name.as_str(),
                self.ror_ids.get(i).and_then(|ror_id| ror_id.as_deref()),
            )
        })
    }
}

fn parse_names(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) else {
        return vec![text.to_string()];
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name.trim()),
            Value::Object(object) => object.get("value").and_then(Value::as_str).map(str::trim),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes `04z8jg394`, `ror.org/04z8jg394` and `https://ror.org/04z8jg394` to the URL form
pub fn normalize_ror_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let id = raw
        .strip_prefix(ROR_PREFIX)
        .or_else(|| raw.strip_prefix("http://ror.org/"))
        .or_else(|| raw.strip_prefix("ror.org/"))
        .unwrap_or(raw)
        .trim_matches('/');

    if id.is_empty() {
        None
    } else {
        Some(format!("{ROR_PREFIX}{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_names_with_aligned_ror_ids() {
        let input = AffiliationInput::parse(
            r#"[{"value":"GFZ Helmholtz Centre"},{"value":"University of Potsdam"}]"#,
            "04z8jg394,",
        );

        assert_eq!(
            input.pairs().collect::<Vec<_>>(),
            vec![
                ("GFZ Helmholtz Centre", Some("https://ror.org/04z8jg394")),
                ("University of Potsdam", None),
            ]
        );
    }

    #[test]
    fn plain_text_is_a_single_name() {
        let input =
            AffiliationInput::parse("Technische Universität Berlin, Institut für Geodäsie", "");

        assert_eq!(input.names.len(), 1);
        assert!(!input.has_identifier_without_name());
    }

    #[test]
    fn detects_identifier_without_name() {
        assert!(
            AffiliationInput::parse("", "https://ror.org/04z8jg394").has_identifier_without_name()
        );
        assert!(!AffiliationInput::parse("", "").has_identifier_without_name());
    }

    #[test]
    fn normalizes_ror_id_forms() {
        let expected = Some("https://ror.org/04z8jg394".to_string());

        assert_eq!(normalize_ror_id("04z8jg394"), expected);
        assert_eq!(normalize_ror_id(" ror.org/04z8jg394 "), expected);
        assert_eq!(normalize_ror_id("https://ror.org/04z8jg394"), expected);
        assert_eq!(normalize_ror_id(""), None);
    }
}
