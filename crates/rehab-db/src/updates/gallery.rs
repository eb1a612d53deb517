//! Gallery create input.

use serde::Serialize;

/// A gallery row to insert once its image is stored.
#[derive(Debug, Clone, Serialize)]
pub struct NewGalleryImage {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    /// Normalized by the repo; `None` means the default category.
    pub category: Option<String>,
}
