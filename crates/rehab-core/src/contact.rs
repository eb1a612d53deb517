//! Contact details shown on public pages (footer, contact page, WhatsApp button).
//!
//! Public pages never fail because settings are missing. Each field falls back
//! to a built-in constant on its own, so a partially filled settings row still
//! renders a complete contact block.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::SiteSettings;

/// Built-in contact constants.
#[derive(Debug, Clone, Copy)]
pub struct DefaultContactInfo {
    pub address: &'static str,
    pub phone_primary: &'static str,
    pub phone_secondary: &'static str,
    pub phone_tertiary: &'static str,
    pub email: &'static str,
    pub whatsapp_number: &'static str,
}

pub const DEFAULT_CONTACT_INFO: DefaultContactInfo = DefaultContactInfo {
    address: "No.74, North Park street, Gobichettipalayam, Erode District, Pin: 638452",
    phone_primary: "9597744300",
    phone_secondary: "9865935809",
    phone_tertiary: "9677638738",
    email: "toddlersmstc@gmail.com",
    whatsapp_number: "919597744300",
};

/// Greeting pre-filled in the WhatsApp chat.
pub const DEFAULT_WHATSAPP_GREETING: &str = "Hello! I'd like to know more about your services.";

/// Fully resolved contact details; every field is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactInfo {
    pub address: String,
    pub phone_primary: String,
    pub phone_secondary: String,
    pub phone_tertiary: String,
    pub email: String,
    pub whatsapp_number: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl ContactInfo {
    /// Resolve contact details from an optional settings row.
    ///
    /// `None` (fetch failed or no row) yields the defaults. Otherwise each
    /// null or blank field is replaced by its default independently.
    #[must_use]
    pub fn resolve(settings: Option<&SiteSettings>) -> Self {
        let info = &DEFAULT_CONTACT_INFO;
        Self {
            address: pick(settings.and_then(|s| s.address.as_ref()), info.address),
            phone_primary: pick(
                settings.and_then(|s| s.phone_primary.as_ref()),
                info.phone_primary,
            ),
            phone_secondary: pick(
                settings.and_then(|s| s.phone_secondary.as_ref()),
                info.phone_secondary,
            ),
            phone_tertiary: pick(
                settings.and_then(|s| s.phone_tertiary.as_ref()),
                info.phone_tertiary,
            ),
            email: pick(settings.and_then(|s| s.email.as_ref()), info.email),
            whatsapp_number: pick(
                settings.and_then(|s| s.whatsapp_number.as_ref()),
                info.whatsapp_number,
            ),
        }
    }

    /// `https://wa.me/<number>?text=<greeting>` with the greeting URL-encoded.
    #[must_use]
    pub fn whatsapp_url(&self, greeting: &str) -> String {
        let number: String = self
            .whatsapp_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        format!(
            "https://wa.me/{number}?text={}",
            urlencoding::encode(greeting)
        )
    }

    /// `tel:` links for the three phone numbers, in display order.
    #[must_use]
    pub fn tel_links(&self) -> Vec<String> {
        [
            &self.phone_primary,
            &self.phone_secondary,
            &self.phone_tertiary,
        ]
        .into_iter()
        .map(|phone| format!("tel:{}", phone.replace(' ', "")))
        .collect()
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

fn pick(value: Option<&String>, fallback: &str) -> String {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn settings_with(email: Option<&str>, whatsapp: Option<&str>) -> SiteSettings {
        let mut settings = SiteSettings::defaults(Utc::now());
        settings.email = email.map(String::from);
        settings.whatsapp_number = whatsapp.map(String::from);
        settings
    }

    #[test]
    fn missing_settings_use_defaults() {
        let info = ContactInfo::resolve(None);
        assert_eq!(info.email, DEFAULT_CONTACT_INFO.email);
        assert_eq!(info.whatsapp_number, DEFAULT_CONTACT_INFO.whatsapp_number);
        assert_eq!(info, ContactInfo::default());
    }

    #[test]
    fn each_field_falls_back_independently() {
        let settings = settings_with(Some("  "), Some("911234567890"));
        let info = ContactInfo::resolve(Some(&settings));
        assert_eq!(info.email, DEFAULT_CONTACT_INFO.email);
        assert_eq!(info.whatsapp_number, "911234567890");
    }

    #[test]
    fn null_field_falls_back() {
        let mut settings = settings_with(Some("front@clinic.example"), None);
        settings.address = None;
        let info = ContactInfo::resolve(Some(&settings));
        assert_eq!(info.email, "front@clinic.example");
        assert_eq!(info.address, DEFAULT_CONTACT_INFO.address);
        assert_eq!(info.whatsapp_number, DEFAULT_CONTACT_INFO.whatsapp_number);
    }

    #[test]
    fn whatsapp_url_encodes_greeting() {
        let info = ContactInfo::default();
        assert_eq!(
            info.whatsapp_url("Hello! I'd like info"),
            "https://wa.me/919597744300?text=Hello%21%20I%27d%20like%20info"
        );
    }

    #[test]
    fn whatsapp_url_strips_formatting_from_number() {
        let settings = settings_with(None, Some("+91 95977 44300"));
        let info = ContactInfo::resolve(Some(&settings));
        assert!(info.whatsapp_url("hi").starts_with("https://wa.me/919597744300?"));
    }

    #[test]
    fn tel_and_mail_links() {
        let info = ContactInfo::default();
        assert_eq!(
            info.tel_links(),
            vec!["tel:9597744300", "tel:9865935809", "tel:9677638738"]
        );
        assert_eq!(info.mailto(), "mailto:toddlersmstc@gmail.com");
    }
}
