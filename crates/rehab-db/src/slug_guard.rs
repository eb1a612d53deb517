//! Slug uniqueness guard for conditions and services.

use rehab_core::enums::ContentKind;
use rehab_core::errors::CoreError;
use rehab_core::slug::slugify;

use crate::error::DatabaseError;
use crate::ports::SlugIndex;

/// Pick the slug for a write: the explicit one if given, else derived from
/// `source`. Both are run through [`slugify`].
///
/// # Errors
///
/// Returns `CoreError::Validation` when nothing slug-worthy remains.
pub fn resolve_slug(explicit: Option<&str>, source: &str) -> Result<String, CoreError> {
    let candidate = explicit
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(source);
    let slug = slugify(candidate);
    if slug.is_empty() {
        return Err(CoreError::validation(
            "Slug is empty. Use letters or digits in the name or slug.",
        ));
    }
    Ok(slug)
}

/// Whether `slug` is free for a record of `kind`, ignoring `exclude_id`.
///
/// # Errors
///
/// Returns `DatabaseError` if the lookup fails.
pub async fn is_slug_available<S: SlugIndex>(
    index: &S,
    kind: ContentKind,
    slug: &str,
    exclude_id: Option<&str>,
) -> Result<bool, DatabaseError> {
    Ok(!index.slug_taken(kind, slug, exclude_id).await?)
}

/// Reject `slug` if another record of `kind` already owns it.
///
/// # Errors
///
/// Returns `CoreError::DuplicateSlug` (wrapped) on a conflict, or the
/// lookup's `DatabaseError`.
pub async fn ensure_unique_slug<S: SlugIndex>(
    index: &S,
    kind: ContentKind,
    slug: &str,
    exclude_id: Option<&str>,
) -> Result<(), DatabaseError> {
    if is_slug_available(index, kind, slug, exclude_id).await? {
        Ok(())
    } else {
        Err(CoreError::DuplicateSlug {
            entity_type: kind.as_str().to_string(),
            slug: slug.to_string(),
        }
        .into())
    }
}
