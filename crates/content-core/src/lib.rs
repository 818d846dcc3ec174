//! Core content types for dummy-inject.
//!
//! This crate provides the foundational types shared by the generator, the
//! host stores and the CLI:
//!
//! - [`FieldType`] - Closed set of field type tags understood by the generator
//! - [`FieldDescriptor`] - One typed field of a blueprint
//! - [`Schema`] - Ordered, handle-unique list of field descriptors
//! - [`Blueprint`] - Tab/section/field structure as stored by the host
//! - [`Target`] - A collection or taxonomy that receives records
//! - [`DummyValue`] / [`DummyRecord`] - Generated values and records
//!
//! # Architecture
//!
//! ```text
//! content-core (this crate)
//!    │
//!    ├─── dummy-generator  (FieldDescriptor → DummyValue)
//!    │
//!    ├─── content-store    (Blueprint lookups, DummyRecord persistence)
//!    │
//!    └─── dummy-inject     (resolution + orchestration)
//! ```
//!
//! # Example
//!
//! ```rust
//! use content_core::{Blueprint, FieldType};
//!
//! let blueprint = Blueprint::from_json("post", r#"[
//!   {"sections": [{"fields": [
//!     {"handle": "title", "field": {"type": "text"}},
//!     {"handle": "views", "field": {"type": "number"}}
//!   ]}]}
//! ]"#).unwrap();
//!
//! let schema = blueprint.flatten();
//! assert_eq!(schema.handles(), vec!["title", "views"]);
//! assert_eq!(schema.fields()[1].field_type, FieldType::Number);
//! ```

pub mod field;
pub mod schema;
pub mod target;
pub mod values;

// Re-exports for convenience
pub use field::{FieldDescriptor, FieldType};
pub use schema::{Blueprint, BlueprintField, Schema, SchemaError, Section, Tab};
pub use target::{Target, TargetKind, RESERVED_COLLECTION};
pub use values::{DummyRecord, DummyValue};
