//! Error types for host store access.

use content_core::{SchemaError, TargetKind};
use thiserror::Error;

/// Errors that can occur while reading from or writing to the host.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Blueprint could not be decoded.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The target row does not exist.
    #[error("No {} found with handle '{handle}'", .kind.noun())]
    TargetNotFound { kind: TargetKind, handle: String },

    /// The host refused to store a record.
    #[error("Failed to create '{slug}': {reason}")]
    Rejected { slug: String, reason: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
