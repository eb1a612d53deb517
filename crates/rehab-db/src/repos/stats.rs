//! Cross-entity reads: dashboard counts and sitemap routes.

use rehab_core::enums::{ContentKind, EntityType};
use rehab_core::responses::DashboardStats;

use crate::error::DatabaseError;
use crate::helpers::{count, entity_type_to_table};
use crate::service::SiteService;

impl SiteService {
    async fn count_table(&self, entity: EntityType) -> Result<u64, DatabaseError> {
        let table = entity_type_to_table(entity);
        count(self.db().conn(), &format!("SELECT COUNT(*) FROM {table}"), ()).await
    }

    /// Record counts for the admin dashboard.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any count fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, DatabaseError> {
        Ok(DashboardStats {
            gallery: self.count_table(EntityType::Gallery).await?,
            messages: self.count_table(EntityType::Message).await?,
            services: self.count_table(EntityType::Service).await?,
            conditions: self.count_table(EntityType::Condition).await?,
        })
    }

    /// Slugs of every condition and service whose detail page resolves,
    /// conditions first, each in display order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn detail_routes(&self) -> Result<Vec<(ContentKind, String)>, DatabaseError> {
        let mut routes = Vec::new();
        for (kind, column) in [
            (ContentKind::Condition, "description"),
            (ContentKind::Service, "full_description"),
        ] {
            let table = crate::helpers::content_kind_to_table(kind);
            let mut rows = self
                .db()
                .conn()
                .query(
                    &format!(
                        "SELECT slug FROM {table}
                         WHERE {column} IS NOT NULL AND trim({column}) != ''
                         ORDER BY display_order ASC"
                    ),
                    (),
                )
                .await?;
            while let Some(row) = rows.next().await? {
                routes.push((kind, row.get::<String>(0)?));
            }
        }
        Ok(routes)
    }
}
