//! Clinical condition repository.

use rehab_core::detail::normalize_long_text;
use rehab_core::entities::ClinicalCondition;
use rehab_core::enums::ContentKind;
use rehab_core::ids::PREFIX_CONDITION;
use rehab_core::responses::ConditionPage;
use rehab_core::validation::require;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, map_slug_conflict, next_display_order, now_utc, parse_datetime, timestamp,
};
use crate::ports::ConditionRepository;
use crate::service::SiteService;
use crate::slug_guard::{ensure_unique_slug, resolve_slug};
use crate::updates::condition::{ConditionUpdate, NewCondition};

const SELECT_COLS: &str =
    "id, name, slug, category, description, display_order, created_at, updated_at";

const ORDER_BY: &str = "ORDER BY display_order ASC, name ASC";

fn row_to_condition(row: &libsql::Row) -> Result<ClinicalCondition, DatabaseError> {
    Ok(ClinicalCondition {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        category: get_opt_string(row, 3)?,
        description: get_opt_string(row, 4)?,
        display_order: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl SiteService {
    async fn query_conditions(
        &self,
        filter: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<ClinicalCondition>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM clinical_conditions {filter} {ORDER_BY}"),
                params,
            )
            .await?;
        let mut conditions = Vec::new();
        while let Some(row) = rows.next().await? {
            conditions.push(row_to_condition(&row)?);
        }
        Ok(conditions)
    }

    /// Public detail page for `slug`; `None` when missing or without a
    /// description.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the lookup fails.
    pub async fn condition_page(&self, slug: &str) -> Result<Option<ConditionPage>, DatabaseError> {
        Ok(self
            .get_condition_by_slug(slug)
            .await?
            .as_ref()
            .and_then(ConditionPage::from_condition))
    }
}

impl ConditionRepository for SiteService {
    async fn create_condition(
        &self,
        input: NewCondition,
    ) -> Result<ClinicalCondition, DatabaseError> {
        let name = require(Some(input.name.as_str()), "Name")?.to_string();
        let slug = resolve_slug(input.slug.as_deref(), &name)?;
        ensure_unique_slug(self, ContentKind::Condition, &slug, None).await?;

        let category = normalize_long_text(input.category.as_deref());
        let description = normalize_long_text(input.description.as_deref());
        let now = now_utc();
        let id = self.db().generate_id(PREFIX_CONDITION).await?;
        let display_order = next_display_order(self.db().conn(), "clinical_conditions").await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO clinical_conditions ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    name.as_str(),
                    slug.as_str(),
                    category.as_deref(),
                    description.as_deref(),
                    display_order,
                    timestamp(now),
                    timestamp(now)
                ],
            )
            .await
            .map_err(|e| map_slug_conflict(e, ContentKind::Condition, &slug))?;
        tracing::debug!(%id, %slug, "condition created");

        Ok(ClinicalCondition {
            id,
            name,
            slug,
            category,
            description,
            display_order,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_condition(&self, id: &str) -> Result<ClinicalCondition, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM clinical_conditions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_condition(&row)
    }

    async fn get_condition_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ClinicalCondition>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM clinical_conditions WHERE slug = ?1"),
                [slug],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_condition(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_conditions(&self) -> Result<Vec<ClinicalCondition>, DatabaseError> {
        self.query_conditions("", ()).await
    }

    async fn list_conditions_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ClinicalCondition>, DatabaseError> {
        self.query_conditions("WHERE category = ?1", [category]).await
    }

    async fn condition_categories(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT category FROM clinical_conditions
                 WHERE category IS NOT NULL AND category != ''
                 ORDER BY category ASC",
                (),
            )
            .await?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row.get::<String>(0)?);
        }
        Ok(categories)
    }

    async fn update_condition(
        &self,
        id: &str,
        update: ConditionUpdate,
    ) -> Result<ClinicalCondition, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        let name = update
            .name
            .as_deref()
            .map(|value| require(Some(value), "Name"))
            .transpose()?;
        if let Some(name) = name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.to_string().into());
            idx += 1;
        }
        // A new name re-derives the slug unless one is given explicitly.
        let mut new_slug = None;
        if update.slug.is_some() || name.is_some() {
            let slug = resolve_slug(update.slug.as_deref(), name.unwrap_or_default())?;
            ensure_unique_slug(self, ContentKind::Condition, &slug, Some(id)).await?;
            sets.push(format!("slug = ?{idx}"));
            params.push(slug.clone().into());
            new_slug = Some(slug);
            idx += 1;
        }
        if let Some(ref category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(
                normalize_long_text(category.as_deref()).map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(
                normalize_long_text(description.as_deref()).map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(order) = update.display_order {
            sets.push(format!("display_order = ?{idx}"));
            params.push(order.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_condition(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(timestamp(now_utc()).into());
        idx += 1;

        params.push(id.into());
        let sql = format!(
            "UPDATE clinical_conditions SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| match &new_slug {
                Some(slug) => map_slug_conflict(e, ContentKind::Condition, slug),
                None => e.into(),
            })?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(%id, ?update, "condition updated");
        self.get_condition(id).await
    }

    async fn delete_condition(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM clinical_conditions WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(%id, "condition deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_condition, test_service};
    use crate::updates::condition::ConditionUpdateBuilder;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_derives_slug_and_appends() {
        let svc = test_service().await;
        let a = svc
            .create_condition(new_condition("Cerebral Palsy", None))
            .await
            .unwrap();
        let b = svc
            .create_condition(new_condition("Autism Spectrum Disorder", Some("text")))
            .await
            .unwrap();
        assert_eq!(a.slug, "cerebral-palsy");
        assert_eq!(b.slug, "autism-spectrum-disorder");
        assert_eq!((a.display_order, b.display_order), (1, 2));
        assert_eq!(svc.get_condition(&a.id).await.unwrap(), a);
    }

    #[tokio::test]
    async fn blank_description_is_stored_as_null() {
        let svc = test_service().await;
        let c = svc
            .create_condition(new_condition("Stroke", Some("  \n ")))
            .await
            .unwrap();
        assert_eq!(c.description, None);
        assert!(!c.has_detail_page());
        assert!(svc.condition_page("stroke").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn colliding_slug_is_rejected() {
        let svc = test_service().await;
        svc.create_condition(new_condition("ADHD", None)).await.unwrap();
        let err = svc
            .create_condition(new_condition("adhd!", None))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(svc.list_conditions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn resave_with_own_slug_is_accepted() {
        let svc = test_service().await;
        let c = svc.create_condition(new_condition("ADHD", None)).await.unwrap();
        let updated = svc
            .update_condition(
                &c.id,
                ConditionUpdateBuilder::new()
                    .slug("adhd")
                    .description(Some("## About\n\nFocus.".into()))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.slug, "adhd");
        assert!(updated.has_detail_page());
    }

    #[tokio::test]
    async fn renaming_rederives_the_slug() {
        let svc = test_service().await;
        let c = svc.create_condition(new_condition("ADHD", None)).await.unwrap();
        let updated = svc
            .update_condition(&c.id, ConditionUpdateBuilder::new().name("Attention Deficit").build())
            .await
            .unwrap();
        assert_eq!(updated.name, "Attention Deficit");
        assert_eq!(updated.slug, "attention-deficit");
        assert!(svc.get_condition_by_slug("adhd").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn explicit_slug_wins_over_a_rename() {
        let svc = test_service().await;
        let c = svc.create_condition(new_condition("ADHD", None)).await.unwrap();
        let updated = svc
            .update_condition(
                &c.id,
                ConditionUpdateBuilder::new()
                    .name("Attention Deficit")
                    .slug("adhd")
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.slug, "adhd");
    }

    #[tokio::test]
    async fn rename_onto_another_records_slug_is_rejected() {
        let svc = test_service().await;
        svc.create_condition(new_condition("Autism", None)).await.unwrap();
        let other = svc.create_condition(new_condition("ADHD", None)).await.unwrap();
        let err = svc
            .update_condition(&other.id, ConditionUpdateBuilder::new().name("Autism").build())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        let unchanged = svc.get_condition(&other.id).await.unwrap();
        assert_eq!((unchanged.name.as_str(), unchanged.slug.as_str()), ("ADHD", "adhd"));
    }

    #[tokio::test]
    async fn update_to_another_records_slug_is_rejected() {
        let svc = test_service().await;
        svc.create_condition(new_condition("Autism", None)).await.unwrap();
        let other = svc.create_condition(new_condition("ADHD", None)).await.unwrap();
        let err = svc
            .update_condition(&other.id, ConditionUpdateBuilder::new().slug("autism").build())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(svc.get_condition(&other.id).await.unwrap().slug, "adhd");
    }

    #[tokio::test]
    async fn categories_and_filtering() {
        let svc = test_service().await;
        for (name, category) in [("Autism", "Pediatric"), ("Stroke", "Adult"), ("ADHD", "Pediatric")] {
            let mut input = new_condition(name, None);
            input.category = Some(category.into());
            svc.create_condition(input).await.unwrap();
        }
        svc.create_condition(new_condition("Other", None)).await.unwrap();

        assert_eq!(
            svc.condition_categories().await.unwrap(),
            vec!["Adult".to_string(), "Pediatric".to_string()]
        );
        let pediatric = svc.list_conditions_by_category("Pediatric").await.unwrap();
        assert_eq!(
            pediatric.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Autism", "ADHD"]
        );
    }

    #[tokio::test]
    async fn detail_page_resolves_by_slug() {
        let svc = test_service().await;
        svc.create_condition(new_condition(
            "Cerebral Palsy",
            Some("## Overview\n\nMotor disorder.\n\n- Spastic\n- Ataxic"),
        ))
        .await
        .unwrap();
        let page = svc.condition_page("cerebral-palsy").await.unwrap().unwrap();
        assert_eq!(page.blocks.len(), 3);
        assert_eq!(page.category_label, "Clinical Condition");
        assert!(svc.condition_page("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.delete_condition("cnd-missing").await,
            Err(DatabaseError::NoResult)
        ));
    }
}
