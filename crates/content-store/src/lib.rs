//! Host CMS access for dummy-inject.
//!
//! The host exposes two surfaces that the injector consumes:
//!
//! - [`MetadataStore`] - read-only lookups of collections, taxonomies and blueprints
//! - [`ContentWriter`] - creation of one entry or term per call
//!
//! Backends implement both. [`MemoryStore`] keeps everything in process and
//! backs tests and dry runs; [`MySqlStore`] and [`PostgresStore`] talk to the
//! host database tables directly.

mod error;
pub mod memory;
pub mod mysql;
pub mod postgresql;
pub mod settings;

use async_trait::async_trait;
use content_core::{Blueprint, DummyRecord, Target, TargetKind};

pub use error::StoreError;
pub use memory::{MemoryStore, StoredRecord};
pub use mysql::MySqlStore;
pub use postgresql::PostgresStore;
pub use settings::{blueprint_reference, parse_settings};

/// Read-only access to the host's content-type metadata.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// List the targets of `kind` that may be selected, ordered by handle.
    ///
    /// The reserved `pages` collection is never returned.
    async fn list_targets(&self, kind: TargetKind) -> Result<Vec<Target>, StoreError>;

    /// Get the decoded settings blob of a target.
    ///
    /// Returns `Ok(None)` when the target exists but has no usable settings,
    /// and `Err(StoreError::TargetNotFound)` when the target itself is missing.
    async fn target_settings(
        &self,
        kind: TargetKind,
        handle: &str,
    ) -> Result<Option<serde_json::Value>, StoreError>;

    /// Look up a blueprint by handle.
    async fn blueprint(&self, handle: &str) -> Result<Option<Blueprint>, StoreError>;
}

/// Record creation on the host.
#[async_trait]
pub trait ContentWriter: Send + Sync {
    /// Create one entry in `collection`.
    async fn create_entry(&self, collection: &str, record: &DummyRecord) -> Result<(), StoreError>;

    /// Create one term in `taxonomy`.
    async fn create_term(&self, taxonomy: &str, record: &DummyRecord) -> Result<(), StoreError>;

    /// Create one record in `target`, dispatching on its kind.
    async fn create_record(&self, target: &Target, record: &DummyRecord) -> Result<(), StoreError> {
        match target.kind {
            TargetKind::Collection => self.create_entry(&target.handle, record).await,
            TargetKind::Taxonomy => self.create_term(&target.handle, record).await,
        }
    }
}

/// A backend providing both host surfaces.
#[async_trait]
pub trait ContentStore: MetadataStore + ContentWriter {
    /// Backend identifier used in log messages
    fn backend_name(&self) -> &'static str;

    /// Release the backend's connections. The store must not be used after.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
