//! Generated values and records.
//!
//! `DummyValue` is the type-agnostic output of the generator. Records keep
//! their fields in schema order and convert to JSON for persistence.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

/// A generated field value.
#[derive(Debug, Clone, PartialEq)]
pub enum DummyValue {
    /// String value
    String(String),

    /// Integer value
    Int(i64),

    /// Boolean value
    Bool(bool),

    /// Calendar date, serialized as `YYYY-MM-DD`
    Date(NaiveDate),

    /// List of values
    Array(Vec<DummyValue>),

    /// Ordered mapping of values
    Object(IndexMap<String, DummyValue>),
}

impl DummyValue {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an array of string values.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(values.into_iter().map(Self::string).collect())
    }

    /// Create an object from key/value pairs, keeping their order.
    pub fn object<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, DummyValue)>,
        K: Into<String>,
    {
        Self::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as an array slice.
    pub fn as_array(&self) -> Option<&[DummyValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, DummyValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Convert to a JSON value.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Int(i) => JsonValue::from(*i),
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Date(d) => JsonValue::String(d.format("%Y-%m-%d").to_string()),
            Self::Array(values) => JsonValue::Array(values.iter().map(Self::to_json).collect()),
            Self::Object(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

/// One generated record, ready to hand to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct DummyRecord {
    /// Zero-based position within the batch
    pub index: u64,

    /// Record slug
    pub slug: String,

    /// Field values in schema order
    pub fields: IndexMap<String, DummyValue>,
}

impl DummyRecord {
    pub fn new(index: u64, slug: impl Into<String>, fields: IndexMap<String, DummyValue>) -> Self {
        Self {
            index,
            slug: slug.into(),
            fields,
        }
    }

    /// Get a field value by handle.
    pub fn get_field(&self, handle: &str) -> Option<&DummyValue> {
        self.fields.get(handle)
    }

    /// Field handles in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|k| k.as_str()).collect()
    }

    /// The record's data as a JSON object.
    pub fn data_json(&self) -> JsonValue {
        JsonValue::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_serializes_as_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(DummyValue::Date(date).to_json(), json!("2024-02-09"));
    }

    #[test]
    fn test_nested_to_json() {
        let value = DummyValue::Array(vec![DummyValue::object([
            ("type", DummyValue::string("paragraph")),
            ("count", DummyValue::Int(2)),
            ("done", DummyValue::Bool(false)),
        ])]);

        assert_eq!(
            value.to_json(),
            json!([{"type": "paragraph", "count": 2, "done": false}])
        );
    }

    #[test]
    fn test_record_json_keeps_field_order() {
        let mut fields = IndexMap::new();
        fields.insert("zeta".to_string(), DummyValue::Int(1));
        fields.insert("alpha".to_string(), DummyValue::Int(2));
        let record = DummyRecord::new(0, "dummy-entry-0", fields);

        let json = record.data_json();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(record.field_names(), vec!["zeta", "alpha"]);
    }
}
