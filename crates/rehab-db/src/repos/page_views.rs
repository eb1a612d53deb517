//! Page view recording and the analytics summary.

use rehab_core::access::is_admin_path;
use rehab_core::entities::PageView;
use rehab_core::errors::CoreError;
use rehab_core::ids::PREFIX_PAGE_VIEW;
use rehab_core::responses::{AnalyticsSummary, PathCount};

use crate::error::DatabaseError;
use crate::helpers::{count, now_utc, parse_datetime, timestamp};
use crate::ports::PageViewRepository;
use crate::service::SiteService;

/// Paths listed in `top_paths`.
const TOP_PATHS: u32 = 10;

impl PageViewRepository for SiteService {
    async fn record_page_view(&self, path: &str) -> Result<Option<PageView>, DatabaseError> {
        let path = path.trim();
        if !path.starts_with('/') {
            return Err(CoreError::validation("Path must start with '/'").into());
        }
        if is_admin_path(path) {
            tracing::debug!(%path, "admin page view not recorded");
            return Ok(None);
        }

        let now = now_utc();
        let id = self.db().generate_id(PREFIX_PAGE_VIEW).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO page_views (id, path, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), path, timestamp(now)],
            )
            .await?;

        Ok(Some(PageView {
            id,
            path: path.to_string(),
            created_at: now,
        }))
    }

    async fn analytics_summary(&self, limit: u32) -> Result<AnalyticsSummary, DatabaseError> {
        let conn = self.db().conn();
        let total_views = count(conn, "SELECT COUNT(*) FROM page_views", ()).await?;

        let mut rows = conn
            .query(
                "SELECT path, COUNT(*) AS views FROM page_views
                 GROUP BY path ORDER BY views DESC, path ASC LIMIT ?1",
                [i64::from(TOP_PATHS)],
            )
            .await?;
        let mut top_paths = Vec::new();
        while let Some(row) = rows.next().await? {
            let views = row.get::<i64>(1)?;
            top_paths.push(PathCount {
                path: row.get(0)?,
                views: u64::try_from(views).unwrap_or_default(),
            });
        }

        let mut rows = conn
            .query(
                "SELECT id, path, created_at FROM page_views
                 ORDER BY created_at DESC, id DESC LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;
        let mut recent = Vec::new();
        while let Some(row) = rows.next().await? {
            recent.push(PageView {
                id: row.get(0)?,
                path: row.get(1)?,
                created_at: parse_datetime(&row.get::<String>(2)?)?,
            });
        }

        Ok(AnalyticsSummary {
            total_views,
            top_paths,
            recent,
        })
    }
}
