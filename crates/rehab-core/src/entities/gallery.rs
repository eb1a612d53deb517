use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An image shown on the public gallery page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Public URL the image is served from.
    pub image_url: String,
    pub category: String,
    /// Display hint; lower values come first.
    pub display_order: i64,
    /// Hidden images stay in the admin list but not on the public page.
    pub visible: bool,
    pub created_at: DateTime<Utc>,
}
