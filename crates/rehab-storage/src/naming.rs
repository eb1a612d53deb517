//! Object key naming and upload checks.

use rehab_core::gallery::normalize_category;

use crate::error::StorageError;

/// Image extensions accepted for upload, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Every stored image lives under this prefix.
pub const UPLOAD_PREFIX: &str = "uploads";

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
#[must_use]
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Lowercase extension of `file_name`, if it is an allowed image type.
///
/// # Errors
///
/// Returns `StorageError::UnsupportedType` for a missing or unknown extension.
pub fn image_extension(file_name: &str) -> Result<String, StorageError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(StorageError::UnsupportedType(file_name.to_string()))
    }
}

/// `uploads/{category}/{timestamp_ms}-{safe_name}`.
#[must_use]
pub fn object_key(category: &str, timestamp_ms: i64, file_name: &str) -> String {
    format!(
        "{UPLOAD_PREFIX}/{}/{timestamp_ms}-{}",
        normalize_category(Some(category)),
        safe_file_name(file_name)
    )
}

/// Reject empty and oversized payloads.
///
/// # Errors
///
/// Returns `StorageError::EmptyFile` or `StorageError::TooLarge`.
pub fn check_size(size: u64, max: u64) -> Result<(), StorageError> {
    if size == 0 {
        return Err(StorageError::EmptyFile);
    }
    if size > max {
        return Err(StorageError::TooLarge { size, max });
    }
    Ok(())
}
