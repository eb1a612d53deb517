//! Service layer owning the database handle.
//!
//! `SiteService` implements every repository trait in [`crate::ports`]; the
//! implementations live in `repos/*.rs`.

use crate::SiteDb;
use crate::error::DatabaseError;

pub struct SiteService {
    db: SiteDb,
}

impl SiteService {
    /// Open a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: SiteDb::open_local(db_path).await?,
        })
    }

    /// Open a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection fails.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: SiteDb::open_remote(url, auth_token).await?,
        })
    }

    #[must_use]
    pub const fn from_db(db: SiteDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &SiteDb {
        &self.db
    }
}
