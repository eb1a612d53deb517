//! Cross-cutting error types for the clinic site.
//!
//! Storage-specific errors (`DatabaseError`, `StorageError`) live in their
//! own crates. `CoreError` covers what every layer can raise: validation
//! failures that must be caught before any write, and lookups that found
//! nothing.

use thiserror::Error;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation. The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// Another record already owns this slug.
    #[error("A {entity_type} with the slug '{slug}' already exists. Please choose a different name or slug.")]
    DuplicateSlug { entity_type: String, slug: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error was raised before any write happened.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DuplicateSlug { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_slug_message_is_user_facing() {
        let err = CoreError::DuplicateSlug {
            entity_type: "service".into(),
            slug: "speech-therapy".into(),
        };
        assert!(err.to_string().contains("'speech-therapy' already exists"));
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_is_not_validation() {
        let err = CoreError::NotFound {
            entity_type: "condition".into(),
            id: "cnd-1".into(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "condition not found: cnd-1");
    }
}
