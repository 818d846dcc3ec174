//! Injection targets: collections and taxonomies.

use std::fmt;

/// Handle of the built-in collection that is never offered as a target.
pub const RESERVED_COLLECTION: &str = "pages";

/// The kind of container that receives generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A collection of entries
    Collection,
    /// A taxonomy of terms
    Taxonomy,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::Collection, TargetKind::Taxonomy];

    /// Slug for the zero-based record `index`.
    pub fn slug(&self, index: u64) -> String {
        match self {
            Self::Collection => format!("dummy-entry-{index}"),
            Self::Taxonomy => format!("dummy-term-{index}"),
        }
    }

    /// Singular container noun ("collection" / "taxonomy").
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Taxonomy => "taxonomy",
        }
    }

    /// Plural container noun ("collections" / "taxonomies").
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Collection => "collections",
            Self::Taxonomy => "taxonomies",
        }
    }

    /// Plural record noun ("entries" / "terms").
    pub fn record_plural(&self) -> &'static str {
        match self {
            Self::Collection => "entries",
            Self::Taxonomy => "terms",
        }
    }

    /// Whether a target with this handle may be offered for selection.
    pub fn is_selectable(&self, handle: &str) -> bool {
        match self {
            Self::Collection => handle != RESERVED_COLLECTION,
            Self::Taxonomy => true,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => f.write_str("Collection"),
            Self::Taxonomy => f.write_str("Taxonomy"),
        }
    }
}

/// A concrete collection or taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    pub handle: String,
    pub title: String,
}

impl Target {
    pub fn new(kind: TargetKind, handle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            handle: handle.into(),
            title: title.into(),
        }
    }
}
