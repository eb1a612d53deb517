//! # rehab-db
//!
//! libSQL storage for the clinic site: settings singleton, gallery, clinical
//! conditions, services, contact messages, and page views.
//!
//! Repository traits in [`ports`] describe what each entity store offers.
//! [`service::SiteService`] implements all of them over one libSQL
//! connection. The content rules (settings resolver, slug guard, reorder) are
//! written against the traits.

pub mod error;
pub mod helpers;
mod migrations;
pub mod ports;
pub mod repos;
pub mod resolver;
pub mod service;
pub mod slug_guard;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: one libSQL database and its connection.
pub struct SiteDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl SiteDb {
    /// Open a local database file, or `":memory:"` for tests.
    ///
    /// Runs migrations on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db, false).await
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db, true).await
    }

    async fn init(db: libsql::Database, remote: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let site_db = Self { db, conn, remote };
        site_db.run_migrations().await?;
        tracing::debug!(remote, "site database ready");
        Ok(site_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a prefixed ID via libSQL, e.g. `"cnd-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehab_core::ids::ALL_PREFIXES;

    async fn test_db() -> SiteDb {
        SiteDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let tables = [
            "site_settings",
            "gallery",
            "clinical_conditions",
            "services",
            "contact_messages",
            "page_views",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            assert!(rows.next().await.unwrap().is_some(), "table '{table}' should exist");
        }
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_uses_prefix_and_hex() {
        let db = test_db().await;
        for prefix in ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            let (head, hex) = id.split_once('-').unwrap();
            assert_eq!(head, *prefix);
            assert_eq!(hex.len(), 8);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[tokio::test]
    async fn settings_table_rejects_second_row() {
        let db = test_db().await;
        let insert = "INSERT INTO site_settings (id, created_at, updated_at) VALUES (?1, 'x', 'x')";
        db.conn().execute(insert, [1i64]).await.unwrap();
        assert!(db.conn().execute(insert, [2i64]).await.is_err());
    }

    #[tokio::test]
    async fn file_backed_database_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.db");
        let path = path.to_str().unwrap();
        {
            let db = SiteDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO page_views (id, path, created_at) VALUES ('pvw-1', '/', 'x')",
                    (),
                )
                .await
                .unwrap();
        }
        let db = SiteDb::open_local(path).await.unwrap();
        let mut rows = db.conn().query("SELECT COUNT(*) FROM page_views", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
