//! In-process store.
//!
//! Holds target metadata and blueprints supplied up front and records every
//! created entry and term. Individual slugs can be configured to fail so the
//! injector's failure handling can be exercised.

use crate::{ContentStore, ContentWriter, MetadataStore, StoreError};
use async_trait::async_trait;
use content_core::{Blueprint, DummyRecord, Target, TargetKind};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// A record persisted by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// Collection or taxonomy handle
    pub container: String,
    /// Record slug
    pub slug: String,
    /// Field data as written
    pub data: Value,
}

#[derive(Debug, Clone)]
struct TargetRow {
    handle: String,
    title: String,
    settings: Option<Value>,
}

/// In-memory implementation of both host surfaces.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Vec<TargetRow>,
    taxonomies: Vec<TargetRow>,
    blueprints: HashMap<String, Blueprint>,
    failing_slugs: HashSet<String>,
    entries: Mutex<Vec<StoredRecord>>,
    terms: Mutex<Vec<StoredRecord>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection, optionally referencing a blueprint.
    pub fn with_collection(
        mut self,
        handle: impl Into<String>,
        title: impl Into<String>,
        blueprint: Option<&str>,
    ) -> Self {
        self.collections.push(TargetRow {
            handle: handle.into(),
            title: title.into(),
            settings: blueprint.map(|b| json!({ "blueprint": b })),
        });
        self
    }

    /// Add a taxonomy, optionally referencing a blueprint.
    pub fn with_taxonomy(
        mut self,
        handle: impl Into<String>,
        title: impl Into<String>,
        blueprint: Option<&str>,
    ) -> Self {
        self.taxonomies.push(TargetRow {
            handle: handle.into(),
            title: title.into(),
            settings: blueprint.map(|b| json!({ "blueprint": b })),
        });
        self
    }

    /// Add a target with an arbitrary settings blob.
    pub fn with_settings(
        mut self,
        kind: TargetKind,
        handle: impl Into<String>,
        title: impl Into<String>,
        settings: Option<Value>,
    ) -> Self {
        let row = TargetRow {
            handle: handle.into(),
            title: title.into(),
            settings,
        };
        match kind {
            TargetKind::Collection => self.collections.push(row),
            TargetKind::Taxonomy => self.taxonomies.push(row),
        }
        self
    }

    /// Register a blueprint.
    pub fn with_blueprint(mut self, blueprint: Blueprint) -> Self {
        self.blueprints.insert(blueprint.handle.clone(), blueprint);
        self
    }

    /// Make creation of any record with this slug fail.
    pub fn failing_on(mut self, slug: impl Into<String>) -> Self {
        self.failing_slugs.insert(slug.into());
        self
    }

    /// Entries created so far, in creation order.
    pub fn entries(&self) -> Vec<StoredRecord> {
        lock(&self.entries).clone()
    }

    /// Whether [`ContentStore::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Terms created so far, in creation order.
    pub fn terms(&self) -> Vec<StoredRecord> {
        lock(&self.terms).clone()
    }

    fn rows(&self, kind: TargetKind) -> &[TargetRow] {
        match kind {
            TargetKind::Collection => &self.collections,
            TargetKind::Taxonomy => &self.taxonomies,
        }
    }

    fn store(
        &self,
        records: &Mutex<Vec<StoredRecord>>,
        container: &str,
        record: &DummyRecord,
    ) -> Result<(), StoreError> {
        if self.failing_slugs.contains(&record.slug) {
            return Err(StoreError::Rejected {
                slug: record.slug.clone(),
                reason: "configured to fail".to_string(),
            });
        }

        lock(records).push(StoredRecord {
            container: container.to_string(),
            slug: record.slug.clone(),
            data: record.data_json(),
        });
        Ok(())
    }
}

fn lock(records: &Mutex<Vec<StoredRecord>>) -> MutexGuard<'_, Vec<StoredRecord>> {
    records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl MetadataStore for MemoryStore {
    async fn list_targets(&self, kind: TargetKind) -> Result<Vec<Target>, StoreError> {
        let mut targets: Vec<Target> = self
            .rows(kind)
            .iter()
            .filter(|row| kind.is_selectable(&row.handle))
            .map(|row| Target::new(kind, row.handle.clone(), row.title.clone()))
            .collect();
        targets.sort_by(|a, b| a.handle.cmp(&b.handle));
        Ok(targets)
    }

    async fn target_settings(
        &self,
        kind: TargetKind,
        handle: &str,
    ) -> Result<Option<Value>, StoreError> {
        self.rows(kind)
            .iter()
            .find(|row| row.handle == handle)
            .map(|row| row.settings.clone())
            .ok_or_else(|| StoreError::TargetNotFound {
                kind,
                handle: handle.to_string(),
            })
    }

    async fn blueprint(&self, handle: &str) -> Result<Option<Blueprint>, StoreError> {
        Ok(self.blueprints.get(handle).cloned())
    }
}

#[async_trait]
impl ContentWriter for MemoryStore {
    async fn create_entry(&self, collection: &str, record: &DummyRecord) -> Result<(), StoreError> {
        self.store(&self.entries, collection, record)
    }

    async fn create_term(&self, taxonomy: &str, record: &DummyRecord) -> Result<(), StoreError> {
        self.store(&self.terms, taxonomy, record)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn record(slug: &str) -> DummyRecord {
        DummyRecord::new(0, slug, IndexMap::new())
    }

    #[tokio::test]
    async fn test_list_targets_excludes_pages_and_sorts() {
        let store = MemoryStore::new()
            .with_collection("posts", "Posts", None)
            .with_collection("pages", "Pages", None)
            .with_collection("events", "Events", None)
            .with_taxonomy("pages", "Pages Taxonomy", None);

        let collections = store.list_targets(TargetKind::Collection).await.unwrap();
        let handles: Vec<&str> = collections.iter().map(|t| t.handle.as_str()).collect();
        assert_eq!(handles, vec!["events", "posts"]);

        let taxonomies = store.list_targets(TargetKind::Taxonomy).await.unwrap();
        assert_eq!(taxonomies.len(), 1);
        assert_eq!(taxonomies[0].title, "Pages Taxonomy");
    }

    #[tokio::test]
    async fn test_target_settings() {
        let store = MemoryStore::new()
            .with_collection("posts", "Posts", Some("post"))
            .with_taxonomy("tags", "Tags", None);

        assert_eq!(
            store
                .target_settings(TargetKind::Collection, "posts")
                .await
                .unwrap(),
            Some(json!({"blueprint": "post"}))
        );
        assert_eq!(
            store
                .target_settings(TargetKind::Taxonomy, "tags")
                .await
                .unwrap(),
            None
        );
        assert!(matches!(
            store.target_settings(TargetKind::Taxonomy, "nope").await,
            Err(StoreError::TargetNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_and_fail() {
        let store = MemoryStore::new().failing_on("dummy-term-1");

        tokio_test::assert_ok!(store.create_entry("posts", &record("dummy-entry-0")).await);
        tokio_test::assert_ok!(store.create_term("tags", &record("dummy-term-0")).await);
        let err = store
            .create_term("tags", &record("dummy-term-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Rejected { ref slug, .. } if slug == "dummy-term-1"));
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].container, "posts");
        assert_eq!(store.terms().len(), 1);
    }

    #[tokio::test]
    async fn test_close_marks_store_closed() {
        let store = MemoryStore::new();
        assert!(!store.is_closed());

        tokio_test::assert_ok!(store.close().await);
        assert!(store.is_closed());
    }
}
