//! Placeholder value generator for dummy-inject.
//!
//! This crate provides the `DummyGenerator` which turns a resolved [`Schema`]
//! into records of placeholder values. Every field type maps to exactly one
//! value shape; randomized types (numbers, booleans, dates, option indices)
//! draw from a seeded RNG so a run can be reproduced.
//!
//! # Architecture
//!
//! ```text
//! Schema (resolved from the host blueprint)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  DummyGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - today         │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    DummyRecord { index, slug, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use content_core::{Schema, TargetKind};
//! use dummy_generator::DummyGenerator;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut generator = DummyGenerator::new(42, today);
//!
//! let record = generator.next_record(TargetKind::Collection, &Schema::default_fields());
//! assert_eq!(record.slug, "dummy-entry-0");
//! assert_eq!(
//!     record.get_field("title").and_then(|v| v.as_str()),
//!     Some("Dummy text content for title")
//! );
//! ```
//!
//! [`Schema`]: content_core::Schema

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{DummyGenerator, RecordIterator};
pub use generators::{generate_fields, generate_value};
