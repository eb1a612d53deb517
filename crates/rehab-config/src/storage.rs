//! Image storage configuration.
//!
//! Uploads are off by default. `local` writes into a directory served as
//! static files; `r2` writes into a Cloudflare R2 (S3-compatible) bucket.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which backend stores uploaded gallery images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Disabled,
    Local,
    R2,
}

fn default_local_dir() -> String {
    String::from("public")
}

fn default_public_base_url() -> String {
    String::from("/")
}

/// 5 MiB.
const fn default_max_upload_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_region() -> String {
    String::from("auto")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for the `local` backend.
    #[serde(default = "default_local_dir")]
    pub local_dir: String,

    /// Prefix joined with object keys to build public URLs.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Largest accepted upload, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    /// Cloudflare account ID (used to build the R2 endpoint).
    #[serde(default)]
    pub account_id: String,

    #[serde(default)]
    pub access_key_id: String,

    #[serde(default)]
    pub secret_access_key: String,

    #[serde(default)]
    pub bucket_name: String,

    /// Custom endpoint URL. If empty, built from `account_id`.
    #[serde(default)]
    pub endpoint: String,

    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            local_dir: default_local_dir(),
            public_base_url: default_public_base_url(),
            max_upload_bytes: default_max_upload_bytes(),
            account_id: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            bucket_name: String::new(),
            endpoint: String::new(),
            region: default_region(),
        }
    }
}

impl StorageConfig {
    /// Check if the R2 credentials have the minimum required fields.
    pub fn r2_is_configured(&self) -> bool {
        (!self.account_id.is_empty() || !self.endpoint.is_empty())
            && !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
            && !self.bucket_name.is_empty()
    }

    /// Build the R2 endpoint URL.
    ///
    /// Returns the custom `endpoint` if set, otherwise builds from `account_id`.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.is_empty() {
            format!("https://{}.r2.cloudflarestorage.com", self.account_id)
        } else {
            self.endpoint.clone()
        }
    }

    /// Check that the selected backend has what it needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` for an `r2` backend without
    /// credentials or a `local` backend without a directory, and
    /// `ConfigError::InvalidValue` for a zero upload limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.max_upload_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        match self.backend {
            StorageBackend::Disabled => Ok(()),
            StorageBackend::Local if self.local_dir.trim().is_empty() => {
                Err(ConfigError::NotConfigured {
                    section: "storage".into(),
                    missing: "local_dir".into(),
                })
            }
            StorageBackend::Local => Ok(()),
            StorageBackend::R2 if !self.r2_is_configured() => Err(ConfigError::NotConfigured {
                section: "storage".into(),
                missing: "R2 account_id/endpoint, access_key_id, secret_access_key, bucket_name"
                    .into(),
            }),
            StorageBackend::R2 => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled_and_valid() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Disabled);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn r2_without_credentials_fails_loud() {
        let config = StorageConfig {
            backend: StorageBackend::R2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn r2_endpoint_from_account() {
        let config = StorageConfig {
            backend: StorageBackend::R2,
            account_id: "acc123".into(),
            access_key_id: "key".into(),
            secret_access_key: "secret".into(),
            bucket_name: "gallery".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.endpoint_url(),
            "https://acc123.r2.cloudflarestorage.com"
        );
    }

    #[test]
    fn custom_endpoint_wins() {
        let config = StorageConfig {
            endpoint: "http://localhost:9000".into(),
            account_id: "acc123".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), "http://localhost:9000");
    }

    #[test]
    fn zero_upload_limit_is_invalid() {
        let config = StorageConfig {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
