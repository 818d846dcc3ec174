//! Field type tags and field descriptors.

use std::fmt;

/// The type of a blueprint field.
///
/// The set is closed: every tag the generator knows has its own variant and
/// anything else lands in [`FieldType::Unknown`] with the raw tag preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Boolean,
    Date,
    Image,
    Markdown,
    Select,
    Checkboxes,
    Grid,
    Relationship,
    User,
    Entries,
    Assets,
    Tags,
    Table,
    Array,
    /// Composite field whose value is a nested record built from its own fields.
    Fieldset,
    Paragraph,
    List,
    Link,
    Button,
    /// Any tag outside the vocabulary above.
    Unknown(String),
}

impl FieldType {
    /// Parse a type tag. Never fails; unrecognised tags become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "image" => Self::Image,
            "markdown" => Self::Markdown,
            "select" => Self::Select,
            "checkboxes" => Self::Checkboxes,
            "grid" => Self::Grid,
            "relationship" => Self::Relationship,
            "user" => Self::User,
            "entries" => Self::Entries,
            "assets" => Self::Assets,
            "tags" => Self::Tags,
            "table" => Self::Table,
            "array" => Self::Array,
            "fieldset" => Self::Fieldset,
            "paragraph" => Self::Paragraph,
            "list" => Self::List,
            "link" => Self::Link,
            "button" => Self::Button,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The tag as it appears in blueprints.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Image => "image",
            Self::Markdown => "markdown",
            Self::Select => "select",
            Self::Checkboxes => "checkboxes",
            Self::Grid => "grid",
            Self::Relationship => "relationship",
            Self::User => "user",
            Self::Entries => "entries",
            Self::Assets => "assets",
            Self::Tags => "tags",
            Self::Table => "table",
            Self::Array => "array",
            Self::Fieldset => "fieldset",
            Self::Paragraph => "paragraph",
            Self::List => "list",
            Self::Link => "link",
            Self::Button => "button",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether the generator has a dedicated mapping for this type.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single typed field of a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field handle, used as the key in generated records
    pub handle: String,

    /// Field type tag
    pub field_type: FieldType,

    /// Nested fields for composite types (empty otherwise)
    pub fields: Vec<FieldDescriptor>,
}

impl FieldDescriptor {
    /// Create a descriptor without nested fields.
    pub fn new(handle: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            handle: handle.into(),
            field_type,
            fields: Vec::new(),
        }
    }

    /// Create a fieldset descriptor with the given nested fields.
    pub fn fieldset(handle: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            handle: handle.into(),
            field_type: FieldType::Fieldset,
            fields,
        }
    }
}
