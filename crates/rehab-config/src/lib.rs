//! # rehab-config
//!
//! Layered configuration for the clinic site tooling, built on figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`REHAB_*`, `__` separates sections)
//! 2. Project-level `.rehab/config.toml`
//! 3. User-level `~/.config/rehab/config.toml`
//! 4. Built-in defaults
//!
//! `REHAB_DATABASE__URL` maps to `database.url`, `REHAB_STORAGE__BACKEND`
//! to `storage.backend`, and so on.
//!
//! ```no_run
//! use rehab_config::RehabConfig;
//!
//! let config = RehabConfig::load_with_dotenv().expect("config");
//! config.validate().expect("usable config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod site;
mod storage;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use site::SiteConfig;
pub use storage::{StorageBackend, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "REHAB_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".rehab/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RehabConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RehabConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`RehabConfig::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` first, then everything [`RehabConfig::load`] reads.
    ///
    /// # Errors
    ///
    /// Same as [`RehabConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the provider chain. Public so tests can layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section that has runtime requirements.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::NotConfigured` or
    /// `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.storage.validate()?;
        if let Some(field) = self.general.zero_limit() {
            return Err(ConfigError::InvalidValue {
                field: field.into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rehab").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor that has one.
    fn load_dotenv() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RehabConfig::default();
        assert!(!config.database.is_remote());
        assert_eq!(config.storage.backend, StorageBackend::Disabled);
        assert_eq!(config.general.default_limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_default_limit_is_rejected() {
        let mut config = RehabConfig::default();
        config.general.default_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: RehabConfig = RehabConfig::figment().extract()?;
            assert_eq!(config.database.path, ".rehab/site.db");
            assert_eq!(config.site.base_url, "https://toddlers-rehab.com");
            Ok(())
        });
    }
}
