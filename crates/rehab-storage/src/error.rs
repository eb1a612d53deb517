//! Storage error types for rehab-storage.

use thiserror::Error;

use crate::naming::ALLOWED_EXTENSIONS;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend is configured.
    #[error("Image uploads are temporarily disabled. Storage setup pending.")]
    Disabled,

    #[error("No file provided")]
    EmptyFile,

    #[error("Unsupported file type '{0}'. Allowed: {allowed}", allowed = ALLOWED_EXTENSIONS.join(", "))]
    UnsupportedType(String),

    #[error("File is too large ({size} bytes; limit is {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("Invalid object key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// The storage section could not be turned into a backend.
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Whether the request was rejected before anything was stored.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Disabled | Self::EmptyFile | Self::UnsupportedType(_) | Self::TooLarge { .. }
        )
    }
}
