//! Listing defaults shared by the admin commands.

use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

const fn default_recent_views() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows returned by `message list` when no `--limit` is given.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Recent page views included in the analytics summary.
    #[serde(default = "default_recent_views")]
    pub recent_views: u32,
}

impl GeneralConfig {
    /// Name of the first zero-valued limit, if any.
    #[must_use]
    pub const fn zero_limit(&self) -> Option<&'static str> {
        if self.default_limit == 0 {
            Some("general.default_limit")
        } else if self.recent_views == 0 {
            Some("general.recent_views")
        } else {
            None
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            recent_views: default_recent_views(),
        }
    }
}
