use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detail::has_detail_page;

/// Category pre-selected when an admin adds a condition.
pub const DEFAULT_CONDITION_CATEGORY: &str = "Pediatric";

/// A clinical condition treated at the clinic (e.g. autism, stroke).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClinicalCondition {
    pub id: String,
    pub name: String,
    /// Unique, URL-safe route segment.
    pub slug: String,
    /// `Pediatric`, `Adult`, or any admin-chosen grouping.
    pub category: Option<String>,
    /// Long-form text. The condition only gets a detail page when this is non-blank.
    pub description: Option<String>,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClinicalCondition {
    #[must_use]
    pub fn has_detail_page(&self) -> bool {
        has_detail_page(self.description.as_deref())
    }
}
