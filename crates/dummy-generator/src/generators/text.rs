//! Text-like placeholder generators.

use content_core::DummyValue;

/// Placeholder for `text` and `textarea` fields.
pub fn generate_text(handle: &str) -> DummyValue {
    DummyValue::String(format!("Dummy text content for {handle}"))
}

/// Placeholder for `markdown` fields.
pub fn generate_markdown() -> DummyValue {
    DummyValue::string("# Dummy Markdown Content")
}

/// Placeholder for field types without a dedicated generator.
pub fn generate_unknown(handle: &str) -> DummyValue {
    DummyValue::String(format!("Unknown field type {handle}"))
}
