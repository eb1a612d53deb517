use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::contact::DEFAULT_CONTACT_INFO;

/// Gallery uploads are open until an admin turns them off.
pub const DEFAULT_GALLERY_ENABLED: bool = true;

/// Gallery capacity used when the settings row is first created.
pub const DEFAULT_MAX_GALLERY_IMAGES: u32 = 150;

/// Upper bound accepted for `max_gallery_images`.
pub const MAX_GALLERY_IMAGES_LIMIT: u32 = 1000;

/// The site-wide settings singleton.
///
/// Exactly one row exists (id `1`). Public pages read it for contact details;
/// the gallery manager reads it for upload limits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SiteSettings {
    pub gallery_enabled: bool,
    pub max_gallery_images: u32,
    pub address: Option<String>,
    pub phone_primary: Option<String>,
    pub phone_secondary: Option<String>,
    pub phone_tertiary: Option<String>,
    pub email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    /// The row written when no settings exist yet.
    #[must_use]
    pub fn defaults(now: DateTime<Utc>) -> Self {
        let info = &DEFAULT_CONTACT_INFO;
        Self {
            gallery_enabled: DEFAULT_GALLERY_ENABLED,
            max_gallery_images: DEFAULT_MAX_GALLERY_IMAGES,
            address: Some(info.address.to_string()),
            phone_primary: Some(info.phone_primary.to_string()),
            phone_secondary: Some(info.phone_secondary.to_string()),
            phone_tertiary: Some(info.phone_tertiary.to_string()),
            email: Some(info.email.to_string()),
            whatsapp_number: Some(info.whatsapp_number.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}
