//! Slug lookups backing the uniqueness guard.

use rehab_core::enums::ContentKind;

use crate::error::DatabaseError;
use crate::helpers::{content_kind_to_table, count};
use crate::ports::SlugIndex;
use crate::service::SiteService;

impl SlugIndex for SiteService {
    async fn slug_taken(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DatabaseError> {
        let table = content_kind_to_table(kind);
        let n = match exclude_id {
            Some(exclude_id) => {
                count(
                    self.db().conn(),
                    &format!("SELECT COUNT(*) FROM {table} WHERE slug = ?1 AND id != ?2"),
                    libsql::params![slug, exclude_id],
                )
                .await?
            }
            None => {
                count(
                    self.db().conn(),
                    &format!("SELECT COUNT(*) FROM {table} WHERE slug = ?1"),
                    [slug],
                )
                .await?
            }
        };
        Ok(n > 0)
    }
}
