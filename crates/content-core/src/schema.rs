//! Schema definitions for dummy-inject.
//!
//! ## Type Hierarchy
//!
//! **Host types** (deserialized from the host's blueprint storage):
//! - `Blueprint` - Named tab/section/field tree
//! - `Tab` - Group of sections
//! - `Section` - Group of fields
//! - `BlueprintField` - One raw field entry
//!
//! **Generator types** (what the generator consumes):
//! - `Schema` - Flat, ordered, handle-unique list of `FieldDescriptor`
//!
//! `Blueprint::flatten` turns the former into the latter, keeping source order
//! (tabs, then sections within a tab, then fields within a section).

use crate::field::{FieldDescriptor, FieldType};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Blueprint tabs could not be decoded
    #[error("Failed to parse blueprint '{handle}': {source}")]
    InvalidBlueprint {
        handle: String,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Schema
// ============================================================================

/// Ordered list of field descriptors, unique by handle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Create a schema from descriptors.
    ///
    /// When two descriptors share a handle the first one wins.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let fields = fields
            .into_iter()
            .filter(|field| {
                let fresh = seen.insert(field.handle.clone());
                if !fresh {
                    warn!("Duplicate field handle '{}' ignored", field.handle);
                }
                fresh
            })
            .collect();
        Self { fields }
    }

    /// A schema with zero fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fallback schema used when a target has no blueprint configured.
    pub fn default_fields() -> Self {
        Self::new(vec![
            FieldDescriptor::new("title", FieldType::Text),
            FieldDescriptor::new("description", FieldType::Textarea),
            FieldDescriptor::new("date", FieldType::Date),
            FieldDescriptor::new("image", FieldType::Image),
        ])
    }

    /// Field descriptors in schema order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Field handles in schema order.
    pub fn handles(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.handle.as_str()).collect()
    }

    /// Get a field by handle.
    pub fn get_field(&self, handle: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Blueprint (host representation)
// ============================================================================

/// A blueprint as stored by the host: a handle plus its tabs.
#[derive(Debug, Clone, Default)]
pub struct Blueprint {
    /// Blueprint handle
    pub handle: String,

    /// Tabs in source order
    pub tabs: Vec<Tab>,
}

/// One blueprint tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tab {
    #[serde(default, deserialize_with = "lenient_list")]
    pub sections: Vec<Section>,
}

/// One section within a tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient_list")]
    pub fields: Vec<BlueprintField>,
}

/// Raw field entry.
///
/// Accepts both the nested form `{handle, field: {type, fields}}` and the flat
/// form `{handle, type, fields}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlueprintField {
    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default, rename = "type")]
    pub field_type: Option<String>,

    #[serde(default)]
    pub field: Option<FieldConfig>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub fields: Vec<BlueprintField>,
}

/// The `field` member of a nested entry: inline config or a reference string
/// pointing at a field in another fieldset.
#[derive(Debug, Clone)]
pub enum FieldConfig {
    Inline(InlineField),
    Reference(String),
}

/// Inline field configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InlineField {
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub fields: Vec<BlueprintField>,
}

impl<'de> Deserialize<'de> for FieldConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(reference) => Ok(Self::Reference(reference)),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self::Inline)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "field config must be an object or a string, found {other}"
            ))),
        }
    }
}

/// A list where an explicit `null`, for the whole list or for one element,
/// counts as nothing.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

impl BlueprintField {
    /// Convert into a descriptor. Entries without a handle yield `None`.
    pub fn to_descriptor(&self) -> Option<FieldDescriptor> {
        let handle = self.handle.as_deref().filter(|h| !h.is_empty())?;

        let (inline_type, inline_fields) = match &self.field {
            Some(FieldConfig::Inline(inline)) => (inline.field_type.as_deref(), &inline.fields[..]),
            _ => (None, &[][..]),
        };

        let tag = self.field_type.as_deref().or(inline_type).unwrap_or_default();
        let nested = if self.fields.is_empty() {
            inline_fields
        } else {
            &self.fields[..]
        };

        Some(FieldDescriptor {
            handle: handle.to_string(),
            field_type: FieldType::from_tag(tag),
            fields: flatten_fields(nested),
        })
    }
}

/// Convert entries to descriptors, skipping entries without a handle and
/// keeping the first of any duplicate handles.
fn flatten_fields(entries: &[BlueprintField]) -> Vec<FieldDescriptor> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(|entry| {
            let descriptor = entry.to_descriptor();
            if descriptor.is_none() {
                warn!("Skipping blueprint field entry without a handle");
            }
            descriptor
        })
        .filter(|descriptor| {
            let fresh = seen.insert(descriptor.handle.clone());
            if !fresh {
                warn!("Duplicate field handle '{}' ignored", descriptor.handle);
            }
            fresh
        })
        .collect()
}

impl Blueprint {
    /// Create a blueprint from already-decoded tabs.
    pub fn new(handle: impl Into<String>, tabs: Vec<Tab>) -> Self {
        Self {
            handle: handle.into(),
            tabs,
        }
    }

    /// Decode a blueprint from the host's JSON `tabs` column.
    ///
    /// `null` decodes to a blueprint with no tabs.
    pub fn from_json(handle: &str, tabs_json: &str) -> Result<Self, SchemaError> {
        let tabs: Value = serde_json::from_str(tabs_json).map_err(|source| invalid(handle, source))?;
        Self::from_value(handle, tabs)
    }

    /// Decode a blueprint from an already-parsed JSON value.
    ///
    /// Tabs may be a list or an object keyed by tab handle; `null` tabs are
    /// skipped.
    pub fn from_value(handle: &str, tabs: Value) -> Result<Self, SchemaError> {
        let raw: Vec<Value> = match tabs {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            Value::Object(keyed) => keyed.into_iter().map(|(_, tab)| tab).collect(),
            other => {
                let source = serde_json::Error::custom(format!(
                    "tabs must be a list or an object, found {other}"
                ));
                return Err(invalid(handle, source));
            }
        };

        let tabs = raw
            .into_iter()
            .filter(|tab| !tab.is_null())
            .map(|tab| serde_json::from_value::<Tab>(tab).map_err(|source| invalid(handle, source)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(handle, tabs))
    }

    /// Flatten tabs → sections → fields into a schema, keeping source order.
    pub fn flatten(&self) -> Schema {
        let entries: Vec<BlueprintField> = self
            .tabs
            .iter()
            .flat_map(|tab| tab.sections.iter())
            .flat_map(|section| section.fields.iter().cloned())
            .collect();
        Schema::new(flatten_fields(&entries))
    }
}

fn invalid(handle: &str, source: serde_json::Error) -> SchemaError {
    SchemaError::InvalidBlueprint {
        handle: handle.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields_order() {
        let schema = Schema::default_fields();
        assert_eq!(schema.handles(), vec!["title", "description", "date", "image"]);
        assert_eq!(schema.fields()[0].field_type, FieldType::Text);
        assert_eq!(schema.fields()[1].field_type, FieldType::Textarea);
        assert_eq!(schema.fields()[2].field_type, FieldType::Date);
        assert_eq!(schema.fields()[3].field_type, FieldType::Image);
    }

    #[test]
    fn test_flatten_preserves_source_order() {
        let json = r#"[
            {"sections": [
                {"fields": [
                    {"handle": "title", "field": {"type": "text"}},
                    {"handle": "body", "field": {"type": "markdown"}}
                ]},
                {"fields": [
                    {"handle": "views", "field": {"type": "number"}}
                ]}
            ]},
            {"sections": [
                {"fields": [
                    {"handle": "published_on", "field": {"type": "date"}}
                ]}
            ]}
        ]"#;

        let schema = Blueprint::from_json("post", json).unwrap().flatten();
        assert_eq!(
            schema.handles(),
            vec!["title", "body", "views", "published_on"]
        );
    }

    #[test]
    fn test_keyed_tabs() {
        let json = r#"{
            "main": {"sections": [{"fields": [{"handle": "title", "field": {"type": "text"}}]}]},
            "sidebar": {"sections": [{"fields": [{"handle": "slug", "field": {"type": "slug"}}]}]}
        }"#;

        let schema = Blueprint::from_json("page", json).unwrap().flatten();
        assert_eq!(schema.handles(), vec!["title", "slug"]);
        assert_eq!(
            schema.get_field("slug").unwrap().field_type,
            FieldType::Unknown("slug".to_string())
        );
    }

    #[test]
    fn test_flat_field_shape() {
        let json = r#"[{"sections": [{"fields": [{"handle": "active", "type": "boolean"}]}]}]"#;
        let schema = Blueprint::from_json("flags", json).unwrap().flatten();
        assert_eq!(schema.fields()[0].field_type, FieldType::Boolean);
    }

    #[test]
    fn test_nested_fieldset_fields() {
        let json = r#"[{"sections": [{"fields": [
            {"handle": "seo", "field": {"type": "fieldset", "fields": [
                {"handle": "meta_title", "field": {"type": "text"}},
                {"handle": "meta_description", "field": {"type": "textarea"}}
            ]}}
        ]}]}]"#;

        let schema = Blueprint::from_json("post", json).unwrap().flatten();
        let seo = schema.get_field("seo").unwrap();
        assert_eq!(seo.field_type, FieldType::Fieldset);
        assert_eq!(seo.fields.len(), 2);
        assert_eq!(seo.fields[0].handle, "meta_title");
        assert_eq!(seo.fields[1].field_type, FieldType::Textarea);
    }

    #[test]
    fn test_entries_without_handle_are_skipped() {
        let json = r#"[{"sections": [{"fields": [
            {"import": "common"},
            {"handle": "title", "field": {"type": "text"}}
        ]}]}]"#;

        let schema = Blueprint::from_json("post", json).unwrap().flatten();
        assert_eq!(schema.handles(), vec!["title"]);
    }

    #[test]
    fn test_field_reference_has_unknown_type() {
        let json = r#"[{"sections": [{"fields": [
            {"handle": "hero", "field": "common.hero"}
        ]}]}]"#;

        let schema = Blueprint::from_json("post", json).unwrap().flatten();
        assert_eq!(
            schema.fields()[0].field_type,
            FieldType::Unknown(String::new())
        );
    }

    #[test]
    fn test_missing_sections_and_null_tabs() {
        let schema = Blueprint::from_json("empty", r#"[{"display": "Main"}]"#)
            .unwrap()
            .flatten();
        assert!(schema.is_empty());

        let schema = Blueprint::from_json("empty", "null").unwrap().flatten();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_duplicate_handles_keep_first() {
        let schema = Schema::new(vec![
            FieldDescriptor::new("title", FieldType::Text),
            FieldDescriptor::new("title", FieldType::Number),
        ]);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.fields()[0].field_type, FieldType::Text);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = Blueprint::from_json("broken", "{not json");
        assert!(matches!(
            result,
            Err(SchemaError::InvalidBlueprint { ref handle, .. }) if handle == "broken"
        ));
    }

    #[test]
    fn test_null_sections_are_empty() {
        let json = r#"[
            {"sections": null},
            {"sections": [{"fields": [{"handle": "title", "field": {"type": "text"}}]}]}
        ]"#;

        let schema = Blueprint::from_json("b", json).unwrap().flatten();
        assert_eq!(schema.handles(), vec!["title"]);
    }

    #[test]
    fn test_null_section_fields_are_empty() {
        let json = r#"[{"sections": [
            {"fields": null},
            {"fields": [{"handle": "views", "field": {"type": "number"}}]}
        ]}]"#;

        let schema = Blueprint::from_json("b", json).unwrap().flatten();
        assert_eq!(schema.handles(), vec!["views"]);
    }

    #[test]
    fn test_null_nested_fields_are_empty() {
        let json = r#"[{"sections": [{"fields": [
            {"handle": "category", "field": {"type": "select", "fields": null}},
            {"handle": "seo", "type": "fieldset", "fields": null},
            {"handle": "hero", "field": null}
        ]}]}]"#;

        let schema = Blueprint::from_json("b", json).unwrap().flatten();
        assert_eq!(schema.handles(), vec!["category", "seo", "hero"]);
        assert_eq!(schema.fields()[0].field_type, FieldType::Select);
        assert_eq!(schema.fields()[1].field_type, FieldType::Fieldset);
        assert!(schema.fields()[1].fields.is_empty());
        assert_eq!(
            schema.fields()[2].field_type,
            FieldType::Unknown(String::new())
        );
    }

    #[test]
    fn test_null_list_elements_are_skipped() {
        let json = r#"[
            null,
            {"sections": [null, {"fields": [null, {"handle": "title", "type": "text"}]}]}
        ]"#;

        let schema = Blueprint::from_json("b", json).unwrap().flatten();
        assert_eq!(schema.handles(), vec!["title"]);
    }

    #[test]
    fn test_decode_errors_name_the_problem() {
        let err = Blueprint::from_json("b", r#"[{"sections": 5}]"#).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to parse blueprint 'b': "));
        assert!(message.contains("invalid type"), "{message}");
        assert!(!message.contains("untagged"), "{message}");

        let err = Blueprint::from_json(
            "b",
            r#"[{"sections": [{"fields": [{"handle": "x", "field": 42}]}]}]"#,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("field config must be an object or a string, found 42"));

        let err = Blueprint::from_json("b", r#""main""#).unwrap_err();
        assert!(err.to_string().contains("tabs must be a list or an object"));
    }

    #[test]
    fn test_nested_duplicate_handles_keep_first() {
        let json = r#"[{"sections": [{"fields": [
            {"handle": "seo", "field": {"type": "fieldset", "fields": [
                {"handle": "meta", "field": {"type": "text"}},
                {"handle": "meta", "field": {"type": "number"}}
            ]}}
        ]}]}]"#;

        let schema = Blueprint::from_json("post", json).unwrap().flatten();
        let seo = schema.get_field("seo").unwrap();
        assert_eq!(seo.fields.len(), 1);
        assert_eq!(seo.fields[0].field_type, FieldType::Text);
    }
}
