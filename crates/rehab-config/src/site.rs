//! Public site settings that are deployment facts, not admin-editable content.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://toddlers-rehab.com")
}

fn default_whatsapp_greeting() -> String {
    String::from("Hello! I'd like to know more about your services.")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Canonical origin used in the sitemap and robots.txt.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Message pre-filled in WhatsApp chats opened from the site.
    #[serde(default = "default_whatsapp_greeting")]
    pub whatsapp_greeting: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            whatsapp_greeting: default_whatsapp_greeting(),
        }
    }
}
