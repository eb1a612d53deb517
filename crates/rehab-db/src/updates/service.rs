//! Service create input and update builder.

use serde::Serialize;

/// Input for a new service. `slug` is derived from `title` when absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewService {
    pub title: String,
    pub slug: Option<String>,
    pub short_description: String,
    pub full_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

pub struct ServiceUpdateBuilder(ServiceUpdate);

impl Default for ServiceUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ServiceUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.0.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn short_description(mut self, text: impl Into<String>) -> Self {
        self.0.short_description = Some(text.into());
        self
    }

    #[must_use]
    pub fn full_description(mut self, text: Option<String>) -> Self {
        self.0.full_description = Some(text);
        self
    }

    #[must_use]
    pub const fn display_order(mut self, order: i64) -> Self {
        self.0.display_order = Some(order);
        self
    }

    #[must_use]
    pub fn build(self) -> ServiceUpdate {
        self.0
    }
}
