//! Fixed placeholder values.
//!
//! These types always produce the same literal, independent of the RNG and
//! of the field handle.

use content_core::DummyValue;

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://miro.medium.com/v2/resize:fit:1400/format:webp/1*U4gZLnRtHEeJuc6tdVLwPw.png";

pub const PLACEHOLDER_LINK_URL: &str = "https://example.com";

pub fn image() -> DummyValue {
    DummyValue::string(PLACEHOLDER_IMAGE_URL)
}

pub fn grid() -> DummyValue {
    DummyValue::Array(vec![DummyValue::object([(
        "field",
        DummyValue::string("Dummy Grid Content"),
    )])])
}

pub fn relationship() -> DummyValue {
    DummyValue::string("related_entry_id")
}

pub fn user() -> DummyValue {
    DummyValue::string("dummy_user_id")
}

pub fn entries() -> DummyValue {
    DummyValue::string("dummy_entry_id")
}

pub fn assets() -> DummyValue {
    DummyValue::string("dummy_asset_id")
}

pub fn tags() -> DummyValue {
    DummyValue::strings(["tag1", "tag2", "tag3"])
}

pub fn table() -> DummyValue {
    DummyValue::Array(vec![DummyValue::object([
        ("column1", DummyValue::string("value1")),
        ("column2", DummyValue::string("value2")),
    ])])
}

pub fn array() -> DummyValue {
    DummyValue::strings(["item1", "item2", "item3"])
}

/// Rich-text document: one paragraph node holding one text node.
pub fn paragraph() -> DummyValue {
    let text_node = DummyValue::object([
        ("type", DummyValue::string("text")),
        ("text", DummyValue::string("Dummy paragraph content")),
    ]);
    DummyValue::Array(vec![DummyValue::object([
        ("type", DummyValue::string("paragraph")),
        ("content", DummyValue::Array(vec![text_node])),
    ])])
}

pub fn list() -> DummyValue {
    DummyValue::strings(["Item 1", "Item 2", "Item 3"])
}

pub fn link() -> DummyValue {
    DummyValue::object([
        ("title", DummyValue::string("Dummy Link Title")),
        ("url", DummyValue::string(PLACEHOLDER_LINK_URL)),
    ])
}

pub fn button() -> DummyValue {
    DummyValue::object([
        ("text", DummyValue::string("Dummy Button Text")),
        ("link", DummyValue::string(PLACEHOLDER_LINK_URL)),
    ])
}
