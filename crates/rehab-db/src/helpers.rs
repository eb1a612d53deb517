//! Row parsing and small query helpers shared by the repos.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rehab_core::enums::{ContentKind, EntityType};
use rehab_core::errors::CoreError;

use crate::error::DatabaseError;

/// Current time at storage precision, so returned records equal re-read ones.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
///
/// Fixed-width RFC 3339 so that `ORDER BY created_at` sorts chronologically.
#[must_use]
pub fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339 and `SQLite`'s `datetime('now')` format
/// (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. SQL NULL and empty string both map to `None`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER column stored as 0/1.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Run a `SELECT COUNT(*)`-shaped query and return the count.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or the count is negative.
pub async fn count(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<u64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let n = row.get::<i64>(0)?;
    u64::try_from(n).map_err(|_| DatabaseError::InvalidState(format!("negative count {n}")))
}

/// Next `display_order` for a table: one past the current maximum.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn next_display_order(
    conn: &libsql::Connection,
    table: &str,
) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT COALESCE(MAX(display_order), 0) + 1 FROM {table}"),
            (),
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// Map a UNIQUE violation on a slug index to the user-facing duplicate error.
///
/// The guard runs first; this only fires when two writers race.
#[must_use]
pub fn map_slug_conflict(err: libsql::Error, kind: ContentKind, slug: &str) -> DatabaseError {
    if err.to_string().contains("UNIQUE constraint failed") {
        CoreError::DuplicateSlug {
            entity_type: kind.as_str().to_string(),
            slug: slug.to_string(),
        }
        .into()
    } else {
        err.into()
    }
}

/// SQL table for an entity type.
#[must_use]
pub const fn entity_type_to_table(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Settings => "site_settings",
        EntityType::Gallery => "gallery",
        EntityType::Condition => "clinical_conditions",
        EntityType::Service => "services",
        EntityType::Message => "contact_messages",
        EntityType::PageView => "page_views",
    }
}

/// SQL table holding the slugged records of a content kind.
#[must_use]
pub const fn content_kind_to_table(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Condition => entity_type_to_table(EntityType::Condition),
        ContentKind::Service => entity_type_to_table(EntityType::Service),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_both_datetime_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-02-09T14:30:00+00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-02-09 14:30:00").unwrap(), expected);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn timestamps_are_fixed_width_and_round_trip() {
        let a = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        let b = a + chrono::Duration::milliseconds(5);
        assert_eq!(timestamp(a).len(), timestamp(b).len());
        assert!(timestamp(a) < timestamp(b));
        assert_eq!(parse_datetime(&timestamp(b)).unwrap(), b);
    }

    #[test]
    fn every_entity_has_a_table() {
        for entity in EntityType::ALL {
            assert!(!entity_type_to_table(*entity).is_empty());
        }
        assert_eq!(content_kind_to_table(ContentKind::Service), "services");
    }
}
