//! Database error types for rehab-db.

use rehab_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Stored data violates an invariant the schema cannot express.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A content rule rejected the operation before any write.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the operation was rejected before touching the database.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(core) if core.is_validation())
    }
}
