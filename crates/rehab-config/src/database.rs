//! Site database configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default local database file, relative to the project root.
fn default_path() -> String {
    String::from(".rehab/site.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local libSQL database file. Used when no remote URL is set.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL URL (e.g., `libsql://clinic-site.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote database is configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    /// Check that the selected mode has what it needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when a remote URL has no token,
    /// or when neither a URL nor a local path is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_remote() && self.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
                missing: "auth_token for remote url".into(),
            });
        }
        if !self.is_remote() && self.path.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
                missing: "path".into(),
            });
        }
        Ok(())
    }
}
