//! Settings singleton resolver.
//!
//! Reads never fail for lack of a row: the first read persists the defaults
//! and returns them. Every call goes to the store; nothing is cached.

use rehab_core::contact::ContactInfo;
use rehab_core::entities::SiteSettings;
use rehab_core::gallery::validate_max_images;

use crate::error::DatabaseError;
use crate::helpers::now_utc;
use crate::ports::SettingsStore;
use crate::updates::settings::SettingsUpdate;

pub struct SettingsResolver<'a, S> {
    store: &'a S,
}

impl<'a, S: SettingsStore> SettingsResolver<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Return the settings row, creating it with defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store fails, or `NoResult` if the row
    /// is still missing after the insert.
    pub async fn get(&self) -> Result<SiteSettings, DatabaseError> {
        if let Some(settings) = self.store.fetch_settings().await? {
            return Ok(settings);
        }
        tracing::info!("no site settings row; creating defaults");
        self.store
            .insert_settings_if_absent(&SiteSettings::defaults(now_utc()))
            .await?;
        // Re-read so a concurrent first insert wins consistently.
        self.store
            .fetch_settings()
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Apply a partial update to the singleton and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` with a validation error when
    /// `max_gallery_images` is out of range (nothing is written), or any
    /// store error.
    pub async fn save(&self, update: &SettingsUpdate) -> Result<SiteSettings, DatabaseError> {
        if let Some(max) = update.max_gallery_images {
            validate_max_images(max)?;
        }
        let current = self.get().await?;
        if update.is_empty() {
            return Ok(current);
        }
        self.store.write_settings(update).await?;
        tracing::debug!(?update, "site settings saved");
        self.store
            .fetch_settings()
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Contact details for public pages.
    ///
    /// Never fails: a store error is logged and every field falls back to
    /// its default.
    pub async fn contact_info(&self) -> ContactInfo {
        match self.get().await {
            Ok(settings) => ContactInfo::resolve(Some(&settings)),
            Err(error) => {
                tracing::warn!(%error, "site settings unavailable; using default contact info");
                ContactInfo::resolve(None)
            }
        }
    }
}
