//! Decoded form submission.
//!
//! A submission carries one field per attribute, with every logical row of a form group spread
//! positionally across several parallel arrays. [`FormData`] keeps the decoded body as a JSON
//! object and offers trimmed, index-aware accessors so that the per-group row parsers never deal
//! with raw [`Value`]s directly.

use serde_json::{Map, Value};
use tracing::warn;

use crate::server::error::Error;

/// Largest distance an explicit `name[i]` index may lie past the current end of its array
const MAX_INDEX_GAP: usize = 1_000;

/// Decoded form submission body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: Map<String, Value>,
}

impl FormData {
    /// Creates an empty submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a submission from a decoded JSON document.
    ///
    /// # Arguments
    /// - `value` - JSON object mapping field names to scalars or arrays
    ///
    /// # Returns
    /// - `Ok(FormData)` - The wrapped submission
    /// - `Err(Error::ParseError)` - The document is not a JSON object
    pub fn from_json(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::ParseError(format!(
                "submission must be a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Builds a submission from URL-encoded `(name, value)` pairs.
    ///
    /// A name ending in `[]` appends to an array, `name[i]` sets index `i` of an array (gaps
    /// are filled with empty strings) and any other name is stored as a scalar. Pairs whose
    /// index lies more than [`MAX_INDEX_GAP`] past the end of the array are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = Map::new();

        for (name, value) in pairs {
            let name = name.as_ref();
            let value = Value::String(value.into());

            match split_indexed(name) {
                Some((key, None)) => array_entry(&mut fields, key).push(value),
                Some((key, Some(index))) => {
                    let array = array_entry(&mut fields, key);
                    if index > array.len().saturating_add(MAX_INDEX_GAP) {
                        warn!(field = key, index, "Dropped form value with out of range index");
                        continue;
                    }
                    if array.len() <= index {
                        array.resize(index + 1, Value::String(String::new()));
                    }
                    array[index] = value;
                }
                None => {
                    fields.insert(name.to_string(), value);
                }
            }
        }

        Self { fields }
    }

    /// Returns true when the submission carries a field with this name
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the trimmed text of a scalar field, or `None` when absent or empty
    pub fn scalar(&self, key: &str) -> Option<String> {
        let text = value_text(self.fields.get(key)?);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Returns the field as an array, or `None` when absent or not array-typed
    pub fn array(&self, key: &str) -> Option<&Vec<Value>> {
        self.fields.get(key).and_then(Value::as_array)
    }

    /// Number of rows in a parallel array, zero when absent
    pub fn row_count(&self, key: &str) -> usize {
        self.array(key).map_or(0, Vec::len)
    }

    /// Returns the raw value at `index` of an array field
    pub fn value_at(&self, key: &str, index: usize) -> Option<&Value> {
        self.array(key).and_then(|array| array.get(index))
    }

    /// Returns the trimmed text at `index` of an array field, empty when absent
    pub fn text_at(&self, key: &str, index: usize) -> String {
        self.value_at(key, index).map(value_text).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for FormData {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Flattens a form value to trimmed text
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Splits `name[]` into `(name, None)` and `name[3]` into `(name, Some(3))`
fn split_indexed(name: &str) -> Option<(&str, Option<usize>)> {
    let inner = name.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let (key, index) = (&inner[..open], &inner[open + 1..]);

    if key.is_empty() {
        return None;
    }
    if index.is_empty() {
        return Some((key, None));
    }

    index.parse().ok().map(|index| (key, Some(index)))
}

fn array_entry<'m>(fields: &'m mut Map<String, Value>, key: &str) -> &'m mut Vec<Value> {
    let entry = fields
        .entry(key.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));

    if !entry.is_array() {
        let previous = entry.take();
        *entry = Value::Array(vec![previous]);
    }

    match entry {
        Value::Array(array) => array,
        _ => unreachable!("entry was converted to an array above"),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_json_rejects_non_object() {
        let result = FormData::from_json(json!(["not", "an", "object"]));

        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn from_pairs_builds_parallel_arrays() {
        let form = FormData::from_pairs([
            ("year", "2024"),
            ("title[]", "First"),
            ("title[]", "Second"),
            ("familynames[2]", "Curie"),
        ]);

        assert_eq!(form.scalar("year").as_deref(), Some("2024"));
        assert_eq!(form.row_count("title"), 2);
        assert_eq!(form.text_at("title", 1), "Second");
        assert_eq!(form.row_count("familynames"), 3);
        assert_eq!(form.text_at("familynames", 0), "");
        assert_eq!(form.text_at("familynames", 2), "Curie");
    }

    /// Expect indices far past the end of an array to be dropped instead of allocated
    #[test]
    fn from_pairs_drops_out_of_range_indices() {
        let form = FormData::from_pairs([
            ("title[]", "First"),
            ("title[18446744073709551615]", "Overflow"),
            ("title[10000000000]", "Huge"),
            ("funder[1000]", "DFG"),
            ("funder[5000]", "NSF"),
        ]);

        assert_eq!(form.row_count("title"), 1);
        assert_eq!(form.text_at("title", 0), "First");
        assert_eq!(form.row_count("funder"), 1_001);
        assert_eq!(form.text_at("funder", 1_000), "DFG");
    }

    #[test]
    fn accessors_trim_and_default() {
        let form = FormData::from_json(json!({
            "doi": "   ",
            "version": 1.5,
            "funder": ["  DFG  ", null],
        }))
        .unwrap();

        assert_eq!(form.scalar("doi"), None);
        assert_eq!(form.scalar("version").as_deref(), Some("1.5"));
        assert_eq!(form.text_at("funder", 0), "DFG");
        assert_eq!(form.text_at("funder", 1), "");
        assert_eq!(form.text_at("funder", 7), "");
        assert_eq!(form.text_at("missing", 0), "");
        assert!(form.array("doi").is_none());
    }

    #[test]
    fn split_indexed_ignores_malformed_names() {
        assert_eq!(split_indexed("roles[]"), Some(("roles", None)));
        assert_eq!(split_indexed("roles[4]"), Some(("roles", Some(4))));
        assert_eq!(split_indexed("roles[x]"), None);
        assert_eq!(split_indexed("[]"), None);
        assert_eq!(split_indexed("roles"), None);
    }
}
