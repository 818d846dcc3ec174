//! Schema resolution for injection targets.

use content_core::{Schema, TargetKind};
use content_store::{blueprint_reference, MetadataStore, StoreError};
use tracing::{debug, warn};

/// Resolve the field schema of a collection or taxonomy.
///
/// - No blueprint configured: warns and returns [`Schema::default_fields`].
/// - Blueprint referenced but missing: returns an empty schema.
/// - Otherwise: the blueprint flattened in tab, section, field order.
///
/// Every call reads the metadata store afresh.
pub async fn resolve_schema<S>(
    store: &S,
    kind: TargetKind,
    handle: &str,
) -> Result<Schema, StoreError>
where
    S: MetadataStore + ?Sized,
{
    let settings = store.target_settings(kind, handle).await?;

    let Some(blueprint_handle) = blueprint_reference(settings.as_ref()) else {
        warn!(
            "No blueprint defined for {}: {}. Falling back to default fields.",
            kind.noun(),
            handle
        );
        return Ok(Schema::default_fields());
    };

    match store.blueprint(blueprint_handle).await? {
        Some(blueprint) => {
            let schema = blueprint.flatten();
            debug!(
                "Resolved blueprint '{}' for {} '{}': {:?}",
                blueprint_handle,
                kind.noun(),
                handle,
                schema.handles()
            );
            Ok(schema)
        }
        None => {
            warn!(
                "Blueprint '{}' referenced by {} '{}' was not found; records will have no fields",
                blueprint_handle,
                kind.noun(),
                handle
            );
            Ok(Schema::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_core::{Blueprint, FieldType};
    use content_store::MemoryStore;
    use serde_json::json;

    fn post_blueprint() -> Blueprint {
        Blueprint::from_json(
            "post",
            r#"[{"sections": [{"fields": [
                {"handle": "title", "field": {"type": "text"}},
                {"handle": "views", "field": {"type": "number"}}
            ]}]}]"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_no_blueprint_falls_back_to_defaults() {
        let store = MemoryStore::new().with_collection("posts", "Posts", None);

        let schema = resolve_schema(&store, TargetKind::Collection, "posts")
            .await
            .unwrap();

        assert_eq!(schema, Schema::default_fields());
        assert_eq!(schema.handles(), vec!["title", "description", "date", "image"]);
    }

    #[tokio::test]
    async fn test_empty_blueprint_reference_falls_back_to_defaults() {
        let store = MemoryStore::new().with_settings(
            TargetKind::Taxonomy,
            "tags",
            "Tags",
            Some(json!({"blueprint": ""})),
        );

        let schema = resolve_schema(&store, TargetKind::Taxonomy, "tags")
            .await
            .unwrap();
        assert_eq!(schema, Schema::default_fields());
    }

    #[tokio::test]
    async fn test_missing_blueprint_gives_empty_schema() {
        let store = MemoryStore::new().with_collection("posts", "Posts", Some("ghost"));

        let schema = resolve_schema(&store, TargetKind::Collection, "posts")
            .await
            .unwrap();
        assert!(schema.is_empty());
    }

    #[tokio::test]
    async fn test_blueprint_is_flattened() {
        let store = MemoryStore::new()
            .with_collection("posts", "Posts", Some("post"))
            .with_blueprint(post_blueprint());

        let schema = resolve_schema(&store, TargetKind::Collection, "posts")
            .await
            .unwrap();

        assert_eq!(schema.handles(), vec!["title", "views"]);
        assert_eq!(schema.fields()[1].field_type, FieldType::Number);
    }

    #[tokio::test]
    async fn test_unknown_target_is_an_error() {
        let store = MemoryStore::new();

        let result = resolve_schema(&store, TargetKind::Collection, "posts").await;
        assert!(matches!(result, Err(StoreError::TargetNotFound { .. })));
    }
}
