//! Service repository.

use rehab_core::detail::normalize_long_text;
use rehab_core::entities::Service;
use rehab_core::enums::ContentKind;
use rehab_core::ids::PREFIX_SERVICE;
use rehab_core::responses::ServicePage;
use rehab_core::validation::require;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, map_slug_conflict, next_display_order, now_utc, parse_datetime, timestamp,
};
use crate::ports::ServiceRepository;
use crate::service::SiteService;
use crate::slug_guard::{ensure_unique_slug, resolve_slug};
use crate::updates::service::{NewService, ServiceUpdate};

const SELECT_COLS: &str = "id, title, slug, short_description, full_description, display_order, created_at, updated_at";

fn row_to_service(row: &libsql::Row) -> Result<Service, DatabaseError> {
    Ok(Service {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        short_description: row.get(3)?,
        full_description: get_opt_string(row, 4)?,
        display_order: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl SiteService {
    /// Public detail page for `slug`; `None` when missing or without a full
    /// description.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the lookup fails.
    pub async fn service_page(&self, slug: &str) -> Result<Option<ServicePage>, DatabaseError> {
        Ok(self
            .get_service_by_slug(slug)
            .await?
            .as_ref()
            .and_then(ServicePage::from_service))
    }
}

impl ServiceRepository for SiteService {
    async fn create_service(&self, input: NewService) -> Result<Service, DatabaseError> {
        let title = require(Some(input.title.as_str()), "Title")?.to_string();
        let short_description =
            require(Some(input.short_description.as_str()), "Short description")?.to_string();
        let slug = resolve_slug(input.slug.as_deref(), &title)?;
        ensure_unique_slug(self, ContentKind::Service, &slug, None).await?;

        let full_description = normalize_long_text(input.full_description.as_deref());
        let now = now_utc();
        let id = self.db().generate_id(PREFIX_SERVICE).await?;
        let display_order = next_display_order(self.db().conn(), "services").await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO services ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    title.as_str(),
                    slug.as_str(),
                    short_description.as_str(),
                    full_description.as_deref(),
                    display_order,
                    timestamp(now),
                    timestamp(now)
                ],
            )
            .await
            .map_err(|e| map_slug_conflict(e, ContentKind::Service, &slug))?;
        tracing::debug!(%id, %slug, "service created");

        Ok(Service {
            id,
            title,
            slug,
            short_description,
            full_description,
            display_order,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_service(&self, id: &str) -> Result<Service, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM services WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_service(&row)
    }

    async fn get_service_by_slug(&self, slug: &str) -> Result<Option<Service>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM services WHERE slug = ?1"),
                [slug],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_service(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_services(&self) -> Result<Vec<Service>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM services ORDER BY display_order ASC, title ASC"),
                (),
            )
            .await?;
        let mut services = Vec::new();
        while let Some(row) = rows.next().await? {
            services.push(row_to_service(&row)?);
        }
        Ok(services)
    }

    async fn update_service(
        &self,
        id: &str,
        update: ServiceUpdate,
    ) -> Result<Service, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        let title = update
            .title
            .as_deref()
            .map(|value| require(Some(value), "Title"))
            .transpose()?;
        if let Some(title) = title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.to_string().into());
            idx += 1;
        }
        // A new title re-derives the slug unless one is given explicitly.
        let mut new_slug = None;
        if update.slug.is_some() || title.is_some() {
            let slug = resolve_slug(update.slug.as_deref(), title.unwrap_or_default())?;
            ensure_unique_slug(self, ContentKind::Service, &slug, Some(id)).await?;
            sets.push(format!("slug = ?{idx}"));
            params.push(slug.clone().into());
            new_slug = Some(slug);
            idx += 1;
        }
        if let Some(ref short) = update.short_description {
            let short = require(Some(short.as_str()), "Short description")?;
            sets.push(format!("short_description = ?{idx}"));
            params.push(short.to_string().into());
            idx += 1;
        }
        if let Some(ref full) = update.full_description {
            sets.push(format!("full_description = ?{idx}"));
            params.push(normalize_long_text(full.as_deref()).map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(order) = update.display_order {
            sets.push(format!("display_order = ?{idx}"));
            params.push(order.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_service(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(timestamp(now_utc()).into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE services SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| match &new_slug {
                Some(slug) => map_slug_conflict(e, ContentKind::Service, slug),
                None => e.into(),
            })?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(%id, ?update, "service updated");
        self.get_service(id).await
    }

    async fn delete_service(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM services WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(%id, "service deleted");
        Ok(())
    }
}
