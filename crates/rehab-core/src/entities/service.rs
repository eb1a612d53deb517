use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detail::has_detail_page;

/// A therapy service offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Card text on the services list. Required.
    pub short_description: String,
    /// Detail page body. Blank or missing means no detail page.
    pub full_description: Option<String>,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    #[must_use]
    pub fn has_detail_page(&self) -> bool {
        has_detail_page(self.full_description.as_deref())
    }
}
