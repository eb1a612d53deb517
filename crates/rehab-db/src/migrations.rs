//! Embedded schema migrations.
//!
//! SQL files are compiled in and run on every open. Statements use
//! `IF NOT EXISTS`, so re-running is a no-op.

use crate::SiteDb;
use crate::error::DatabaseError;

/// Six tables, seven indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl SiteDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
