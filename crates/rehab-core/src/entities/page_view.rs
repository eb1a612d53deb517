use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One recorded visit to a public page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PageView {
    pub id: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
}
