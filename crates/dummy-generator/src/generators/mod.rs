//! Value generators for each field type.
//!
//! This module holds the type-to-value table. Each arm delegates to the
//! module responsible for that family of values.

pub mod choice;
pub mod date;
pub mod numeric;
pub mod static_value;
pub mod text;

use chrono::NaiveDate;
use content_core::{DummyValue, FieldDescriptor, FieldType};
use indexmap::IndexMap;
use rand::Rng;

/// Generate the value for one field.
///
/// `today` is the reference date for `date` fields. Fieldsets recurse into
/// their nested fields; unknown types produce a placeholder string.
pub fn generate_value<R: Rng>(field: &FieldDescriptor, rng: &mut R, today: NaiveDate) -> DummyValue {
    let handle = field.handle.as_str();

    match &field.field_type {
        FieldType::Text | FieldType::Textarea => text::generate_text(handle),

        FieldType::Number => numeric::generate_number(rng),

        FieldType::Boolean => numeric::generate_boolean(rng),

        FieldType::Date => date::generate_past_date(rng, today),

        FieldType::Image => static_value::image(),

        FieldType::Markdown => text::generate_markdown(),

        FieldType::Select => choice::generate_select(rng),

        FieldType::Checkboxes => choice::generate_checkboxes(rng),

        FieldType::Grid => static_value::grid(),

        FieldType::Relationship => static_value::relationship(),

        FieldType::User => static_value::user(),

        FieldType::Entries => static_value::entries(),

        FieldType::Assets => static_value::assets(),

        FieldType::Tags => static_value::tags(),

        FieldType::Table => static_value::table(),

        FieldType::Array => static_value::array(),

        FieldType::Fieldset => DummyValue::Object(generate_fields(&field.fields, rng, today)),

        FieldType::Paragraph => static_value::paragraph(),

        FieldType::List => static_value::list(),

        FieldType::Link => static_value::link(),

        FieldType::Button => static_value::button(),

        FieldType::Unknown(tag) => {
            tracing::debug!("No generator for field type '{}' ({})", tag, handle);
            text::generate_unknown(handle)
        }
    }
}

/// Generate values for a list of fields, keyed by handle in field order.
///
/// When two fields share a handle only the first is generated.
pub fn generate_fields<R: Rng>(
    fields: &[FieldDescriptor],
    rng: &mut R,
    today: NaiveDate,
) -> IndexMap<String, DummyValue> {
    let mut values = IndexMap::with_capacity(fields.len());
    for field in fields {
        if values.contains_key(&field.handle) {
            tracing::warn!("Duplicate field handle '{}' ignored", field.handle);
            continue;
        }
        let value = generate_value(field, rng, today);
        values.insert(field.handle.clone(), value);
    }
    values
}
