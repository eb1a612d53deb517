//! Gallery rules that sit in front of the upload boundary.

use crate::entities::{MAX_GALLERY_IMAGES_LIMIT, SiteSettings};
use crate::errors::CoreError;
use crate::slug::slugify;

/// Category used when an upload does not name one.
pub const DEFAULT_GALLERY_CATEGORY: &str = "general";

/// Check the settings gate before accepting a new gallery image.
///
/// # Errors
///
/// Returns `CoreError::Validation` when uploads are switched off or the
/// gallery already holds `max_gallery_images` images.
pub fn check_upload_allowed(settings: &SiteSettings, current_count: u64) -> Result<(), CoreError> {
    if !settings.gallery_enabled {
        return Err(CoreError::validation(
            "Gallery uploads are disabled. Enable them in site settings first.",
        ));
    }
    if current_count >= u64::from(settings.max_gallery_images) {
        return Err(CoreError::validation(format!(
            "Gallery limit reached ({} images). Delete an image or raise the limit in site settings.",
            settings.max_gallery_images
        )));
    }
    Ok(())
}

/// Validate a `max_gallery_images` value from the settings form.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the value is outside `1..=1000`.
pub fn validate_max_images(value: u32) -> Result<u32, CoreError> {
    if (1..=MAX_GALLERY_IMAGES_LIMIT).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::validation(format!(
            "Maximum gallery images must be between 1 and {MAX_GALLERY_IMAGES_LIMIT}"
        )))
    }
}

/// Canonical category name: slugified, or the default when blank.
#[must_use]
pub fn normalize_category(category: Option<&str>) -> String {
    let slug = category.map(slugify).unwrap_or_default();
    if slug.is_empty() {
        DEFAULT_GALLERY_CATEGORY.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn settings(enabled: bool, max: u32) -> SiteSettings {
        let mut settings = SiteSettings::defaults(Utc::now());
        settings.gallery_enabled = enabled;
        settings.max_gallery_images = max;
        settings
    }

    #[test]
    fn allows_upload_under_limit() {
        assert!(check_upload_allowed(&settings(true, 3), 2).is_ok());
    }

    #[test]
    fn rejects_when_disabled() {
        let err = check_upload_allowed(&settings(false, 150), 0).unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }

    #[test]
    fn rejects_at_limit() {
        let err = check_upload_allowed(&settings(true, 3), 3).unwrap_err();
        assert!(err.to_string().contains("limit reached (3 images)"));
    }

    #[test]
    fn max_images_bounds() {
        assert!(validate_max_images(0).is_err());
        assert_eq!(validate_max_images(1).unwrap(), 1);
        assert_eq!(validate_max_images(1000).unwrap(), 1000);
        assert!(validate_max_images(1001).is_err());
    }

    #[test]
    fn category_normalization() {
        assert_eq!(normalize_category(None), "general");
        assert_eq!(normalize_category(Some("  ")), "general");
        assert_eq!(normalize_category(Some("Therapy Rooms")), "therapy-rooms");
    }
}
