//! Site settings update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gallery_images: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_primary: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_secondary: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_tertiary: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<Option<String>>,
}

impl SettingsUpdate {
    /// Whether the update names no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.gallery_enabled.is_none()
            && self.max_gallery_images.is_none()
            && self.address.is_none()
            && self.phone_primary.is_none()
            && self.phone_secondary.is_none()
            && self.phone_tertiary.is_none()
            && self.email.is_none()
            && self.whatsapp_number.is_none()
    }
}

pub struct SettingsUpdateBuilder(SettingsUpdate);

impl Default for SettingsUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SettingsUpdate::default())
    }

    #[must_use]
    pub const fn gallery_enabled(mut self, enabled: bool) -> Self {
        self.0.gallery_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub const fn max_gallery_images(mut self, max: u32) -> Self {
        self.0.max_gallery_images = Some(max);
        self
    }

    #[must_use]
    pub fn address(mut self, address: Option<String>) -> Self {
        self.0.address = Some(address);
        self
    }

    #[must_use]
    pub fn phone_primary(mut self, phone: Option<String>) -> Self {
        self.0.phone_primary = Some(phone);
        self
    }

    #[must_use]
    pub fn phone_secondary(mut self, phone: Option<String>) -> Self {
        self.0.phone_secondary = Some(phone);
        self
    }

    #[must_use]
    pub fn phone_tertiary(mut self, phone: Option<String>) -> Self {
        self.0.phone_tertiary = Some(phone);
        self
    }

    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub fn whatsapp_number(mut self, number: Option<String>) -> Self {
        self.0.whatsapp_number = Some(number);
        self
    }

    #[must_use]
    pub fn build(self) -> SettingsUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_only_named_fields() {
        let update = SettingsUpdateBuilder::new()
            .max_gallery_images(200)
            .email(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"max_gallery_images": 200, "email": null}));
        assert!(!update.is_empty());
        assert!(SettingsUpdate::default().is_empty());
    }
}
