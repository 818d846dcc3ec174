//! Settings blob helpers shared by all backends.

use serde_json::Value;
use tracing::warn;

/// Decode a raw settings column.
///
/// Missing, `null` and malformed blobs all decode to `None`, which callers
/// treat as "no blueprint configured".
pub fn parse_settings(raw: Option<&str>) -> Option<Value> {
    let raw = raw?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed settings blob: {}", e);
            None
        }
    }
}

/// Extract the blueprint handle referenced by a settings blob.
///
/// Empty strings and non-string values count as no reference.
pub fn blueprint_reference(settings: Option<&Value>) -> Option<&str> {
    settings?
        .get("blueprint")?
        .as_str()
        .filter(|handle| !handle.is_empty())
}
