//! Clinical condition create input and update builder.

use serde::Serialize;

/// Input for a new condition. `slug` is derived from `name` when absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewCondition {
    pub name: String,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConditionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overrides the slug a new `name` would derive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

pub struct ConditionUpdateBuilder(ConditionUpdate);

impl Default for ConditionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ConditionUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.0.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Option<String>) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub const fn display_order(mut self, order: i64) -> Self {
        self.0.display_order = Some(order);
        self
    }

    #[must_use]
    pub fn build(self) -> ConditionUpdate {
        self.0
    }
}
