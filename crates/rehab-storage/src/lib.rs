//! # rehab-storage
//!
//! The upload boundary for gallery images: store bytes under a generated key,
//! hand back a public URL, delete by key.
//!
//! Backends come from the `storage` config section:
//! - `disabled` refuses every upload with a user-facing message
//! - `local` writes below a directory served as static files
//! - `r2` writes to a Cloudflare R2 bucket through the S3 API

pub mod error;
pub mod naming;

use std::sync::Arc;

use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use rehab_config::{StorageBackend, StorageConfig};
use serde::Serialize;

pub use error::StorageError;
use naming::{check_size, image_extension, object_key};

/// What an upload produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredImage {
    /// Object key, e.g. `uploads/general/1700000000000-room.jpg`.
    pub key: String,
    /// Public URL the site serves the image from.
    pub url: String,
    /// The sanitized file name inside the key.
    pub file_name: String,
}

enum Backend {
    Disabled,
    Object(Arc<dyn ObjectStore>),
}

pub struct ImageStore {
    backend: Backend,
    public_base_url: String,
    max_upload_bytes: u64,
}

impl ImageStore {
    /// A store that refuses every upload.
    #[must_use]
    pub fn disabled() -> Self {
        let defaults = StorageConfig::default();
        Self {
            backend: Backend::Disabled,
            public_base_url: defaults.public_base_url,
            max_upload_bytes: defaults.max_upload_bytes,
        }
    }

    /// Wrap any object store. Used by tests with `InMemory`.
    #[must_use]
    pub fn with_object_store(
        store: Arc<dyn ObjectStore>,
        public_base_url: impl Into<String>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            backend: Backend::Object(store),
            public_base_url: public_base_url.into(),
            max_upload_bytes,
        }
    }

    /// Build the backend selected in config.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` when the section is incomplete or the
    /// client cannot be built, and `StorageError::Io` when the local
    /// directory cannot be created.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        config
            .validate()
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let store: Arc<dyn ObjectStore> = match config.backend {
            StorageBackend::Disabled => {
                tracing::debug!("image storage disabled");
                return Ok(Self {
                    backend: Backend::Disabled,
                    public_base_url: config.public_base_url.clone(),
                    max_upload_bytes: config.max_upload_bytes,
                });
            }
            StorageBackend::Local => {
                std::fs::create_dir_all(&config.local_dir)?;
                Arc::new(LocalFileSystem::new_with_prefix(&config.local_dir)?)
            }
            StorageBackend::R2 => Arc::new(
                AmazonS3Builder::new()
                    .with_bucket_name(&config.bucket_name)
                    .with_access_key_id(&config.access_key_id)
                    .with_secret_access_key(&config.secret_access_key)
                    .with_endpoint(config.endpoint_url())
                    .with_region(&config.region)
                    .build()?,
            ),
        };
        tracing::debug!(backend = ?config.backend, "image storage ready");
        Ok(Self::with_object_store(
            store,
            config.public_base_url.clone(),
            config.max_upload_bytes,
        ))
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self.backend, Backend::Object(_))
    }

    #[must_use]
    pub const fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Check an upload without storing it.
    ///
    /// # Errors
    ///
    /// Returns the validation error the upload would fail with.
    pub fn check_upload(&self, file_name: &str, size: u64) -> Result<(), StorageError> {
        if !self.is_enabled() {
            return Err(StorageError::Disabled);
        }
        image_extension(file_name)?;
        check_size(size, self.max_upload_bytes)
    }

    /// Store `bytes` under `uploads/{category}/{timestamp_ms}-{safe_name}`.
    ///
    /// # Errors
    ///
    /// Returns a validation error (see [`ImageStore::check_upload`]) or the
    /// backend's error.
    pub async fn upload(
        &self,
        category: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, StorageError> {
        let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        self.check_upload(file_name, size)?;
        let Backend::Object(store) = &self.backend else {
            return Err(StorageError::Disabled);
        };

        let key = object_key(category, chrono::Utc::now().timestamp_millis(), file_name);
        let path = parse_key(&key)?;
        store.put(&path, PutPayload::from(bytes)).await?;
        tracing::debug!(%key, size, "image stored");

        Ok(StoredImage {
            url: self.public_url(&key),
            file_name: naming::safe_file_name(file_name),
            key,
        })
    }

    /// Delete an object. A missing object counts as deleted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Disabled` without a backend, or the backend's
    /// error for anything other than not-found.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let Backend::Object(store) = &self.backend else {
            return Err(StorageError::Disabled);
        };
        match store.delete(&parse_key(key)?).await {
            Ok(()) => {
                tracing::debug!(%key, "image deleted");
                Ok(())
            }
            Err(object_store::Error::NotFound { .. }) => {
                tracing::debug!(%key, "image already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Public URL for a key.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url.trim_end_matches('/'))
    }

    /// The key behind a URL produced by this store, if it is one.
    #[must_use]
    pub fn key_for_url(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/", self.public_base_url.trim_end_matches('/'));
        url.strip_prefix(&prefix)
            .filter(|key| key.starts_with(naming::UPLOAD_PREFIX))
            .map(String::from)
    }
}

fn parse_key(key: &str) -> Result<Path, StorageError> {
    Path::parse(key).map_err(|e| StorageError::InvalidKey {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
