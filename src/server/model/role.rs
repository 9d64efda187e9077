use serde_json::Value;

/// Ordered, de-duplicated list of submitted role names
///
/// Role sets reach the server in several shapes: a JSON-encoded string holding an array, a
/// native array of plain names, an array of `{"value": name}` objects produced by the tag
/// input, or a single comma-separated string. [`RoleNames::parse`] folds all of them into one
/// list before anything is linked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleNames(Vec<String>);

impl RoleNames {
    /// Normalizes a raw role field into a list of trimmed names
    pub fn parse(value: &Value) -> Self {
        let mut names = RoleNames::default();
        names.collect(value);
        names
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn collect(&mut self, value: &Value) {
        match value {
            Value::String(text) => {
                let text = text.trim();
                if text.starts_with('[') || text.starts_with('{') {
                    if let Ok(decoded) = serde_json::from_str::<Value>(text) {
                        self.collect(&decoded);
                        return;
                    }
                }
                for name in text.split(',') {
                    self.push(name);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.collect(item);
                }
            }
            Value::Object(object) => {
                if let Some(Value::String(name)) = object.get("value") {
                    self.push(name);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    fn push(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.0.iter().any(|existing| existing == name) {
            self.0.push(name.to_string());
        }
    }
}
