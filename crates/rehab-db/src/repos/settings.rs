//! Settings singleton storage. Every statement is keyed by `SETTINGS_ID`.

use rehab_core::detail::normalize_long_text;
use rehab_core::entities::SiteSettings;
use rehab_core::ids::SETTINGS_ID;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, now_utc, parse_datetime, timestamp};
use crate::ports::SettingsStore;
use crate::service::SiteService;
use crate::updates::settings::SettingsUpdate;

const SELECT_COLS: &str = "gallery_enabled, max_gallery_images, address, phone_primary, \
     phone_secondary, phone_tertiary, email, whatsapp_number, created_at, updated_at";

fn row_to_settings(row: &libsql::Row) -> Result<SiteSettings, DatabaseError> {
    let max = row.get::<i64>(1)?;
    Ok(SiteSettings {
        gallery_enabled: get_bool(row, 0)?,
        max_gallery_images: u32::try_from(max).map_err(|_| {
            DatabaseError::InvalidState(format!("max_gallery_images out of range: {max}"))
        })?,
        address: get_opt_string(row, 2)?,
        phone_primary: get_opt_string(row, 3)?,
        phone_secondary: get_opt_string(row, 4)?,
        phone_tertiary: get_opt_string(row, 5)?,
        email: get_opt_string(row, 6)?,
        whatsapp_number: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

fn text_value(value: Option<&str>) -> libsql::Value {
    normalize_long_text(value).map_or(libsql::Value::Null, Into::into)
}

impl SettingsStore for SiteService {
    async fn fetch_settings(&self) -> Result<Option<SiteSettings>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM site_settings WHERE id = ?1"),
                [SETTINGS_ID],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_settings(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert_settings_if_absent(&self, defaults: &SiteSettings) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO site_settings (id, {SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                     ON CONFLICT(id) DO NOTHING"
                ),
                libsql::params![
                    SETTINGS_ID,
                    i64::from(defaults.gallery_enabled),
                    i64::from(defaults.max_gallery_images),
                    text_value(defaults.address.as_deref()),
                    text_value(defaults.phone_primary.as_deref()),
                    text_value(defaults.phone_secondary.as_deref()),
                    text_value(defaults.phone_tertiary.as_deref()),
                    text_value(defaults.email.as_deref()),
                    text_value(defaults.whatsapp_number.as_deref()),
                    timestamp(defaults.created_at),
                    timestamp(defaults.updated_at)
                ],
            )
            .await?;
        Ok(())
    }

    async fn write_settings(&self, update: &SettingsUpdate) -> Result<(), DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(enabled) = update.gallery_enabled {
            sets.push(format!("gallery_enabled = ?{idx}"));
            params.push(i64::from(enabled).into());
            idx += 1;
        }
        if let Some(max) = update.max_gallery_images {
            sets.push(format!("max_gallery_images = ?{idx}"));
            params.push(i64::from(max).into());
            idx += 1;
        }

        let text_fields = [
            ("address", &update.address),
            ("phone_primary", &update.phone_primary),
            ("phone_secondary", &update.phone_secondary),
            ("phone_tertiary", &update.phone_tertiary),
            ("email", &update.email),
            ("whatsapp_number", &update.whatsapp_number),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value {
                sets.push(format!("{column} = ?{idx}"));
                params.push(text_value(value.as_deref()));
                idx += 1;
            }
        }

        if sets.is_empty() {
            return Ok(());
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(timestamp(now_utc()).into());
        idx += 1;

        params.push(SETTINGS_ID.into());
        let sql = format!(
            "UPDATE site_settings SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::settings::SettingsUpdateBuilder;

    #[tokio::test]
    async fn fetch_on_empty_table_is_none() {
        let svc = test_service().await;
        assert!(svc.fetch_settings().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_if_absent_keeps_the_first_row() {
        let svc = test_service().await;
        let now = now_utc();
        let first = SiteSettings::defaults(now);
        svc.insert_settings_if_absent(&first).await.unwrap();

        let mut second = SiteSettings::defaults(now);
        second.max_gallery_images = 10;
        svc.insert_settings_if_absent(&second).await.unwrap();

        let stored = svc.fetch_settings().await.unwrap().unwrap();
        assert_eq!(stored.max_gallery_images, first.max_gallery_images);
    }

    #[tokio::test]
    async fn write_without_row_reports_no_result() {
        let svc = test_service().await;
        let update = SettingsUpdateBuilder::new().gallery_enabled(false).build();
        assert!(matches!(
            svc.write_settings(&update).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn blank_contact_fields_are_stored_as_null() {
        let svc = test_service().await;
        svc.insert_settings_if_absent(&SiteSettings::defaults(now_utc()))
            .await
            .unwrap();
        let update = SettingsUpdateBuilder::new()
            .whatsapp_number(Some("  ".into()))
            .build();
        svc.write_settings(&update).await.unwrap();

        let stored = svc.fetch_settings().await.unwrap().unwrap();
        assert_eq!(stored.whatsapp_number, None);
    }
}
