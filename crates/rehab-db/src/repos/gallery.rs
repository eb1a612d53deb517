//! Gallery repository: list, create, toggle, delete, and single-step moves.

use rehab_core::entities::GalleryImage;
use rehab_core::enums::MoveDirection;
use rehab_core::gallery::normalize_category;
use rehab_core::ids::PREFIX_GALLERY;
use rehab_core::reorder::{MovePlan, plan_move};
use rehab_core::validation::require;

use crate::error::DatabaseError;
use crate::helpers::{
    count, get_bool, get_opt_string, next_display_order, now_utc, parse_datetime, timestamp,
};
use crate::ports::{GalleryMove, GalleryRepository};
use crate::service::SiteService;
use crate::updates::gallery::NewGalleryImage;

const SELECT_COLS: &str =
    "id, title, description, image_url, category, display_order, visible, created_at";

/// Admin order. `created_at, id` break ties left by legacy duplicate orders.
const ORDER_BY: &str = "ORDER BY display_order ASC, created_at ASC, id ASC";

fn row_to_image(row: &libsql::Row) -> Result<GalleryImage, DatabaseError> {
    Ok(GalleryImage {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        image_url: row.get(3)?,
        category: row.get(4)?,
        display_order: row.get(5)?,
        visible: get_bool(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl SiteService {
    async fn query_gallery(&self, filter: &str) -> Result<Vec<GalleryImage>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM gallery {filter} {ORDER_BY}"),
                (),
            )
            .await?;
        let mut images = Vec::new();
        while let Some(row) = rows.next().await? {
            images.push(row_to_image(&row)?);
        }
        Ok(images)
    }

    /// Persist every write of a move in one transaction.
    async fn apply_move_plan(&self, plan: &MovePlan) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        for change in plan.changes() {
            let changed = tx
                .execute(
                    "UPDATE gallery SET display_order = ?1 WHERE id = ?2",
                    libsql::params![change.display_order, change.id.as_str()],
                )
                .await?;
            if changed == 0 {
                // Dropping the transaction rolls it back.
                return Err(DatabaseError::NoResult);
            }
        }
        tx.commit().await?;
        Ok(())
    }
}

impl GalleryRepository for SiteService {
    async fn list_gallery(&self) -> Result<Vec<GalleryImage>, DatabaseError> {
        self.query_gallery("").await
    }

    async fn list_visible_gallery(&self) -> Result<Vec<GalleryImage>, DatabaseError> {
        self.query_gallery("WHERE visible = 1").await
    }

    async fn get_gallery_image(&self, id: &str) -> Result<GalleryImage, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM gallery WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_image(&row)
    }

    async fn count_gallery(&self) -> Result<u64, DatabaseError> {
        count(self.db().conn(), "SELECT COUNT(*) FROM gallery", ()).await
    }

    async fn create_gallery_image(
        &self,
        input: NewGalleryImage,
    ) -> Result<GalleryImage, DatabaseError> {
        let title = require(Some(input.title.as_str()), "Title")?.to_string();
        let image_url = require(Some(input.image_url.as_str()), "Image URL")?.to_string();
        let description = rehab_core::detail::normalize_long_text(input.description.as_deref());
        let category = normalize_category(input.category.as_deref());

        let now = now_utc();
        let id = self.db().generate_id(PREFIX_GALLERY).await?;
        let display_order = next_display_order(self.db().conn(), "gallery").await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO gallery ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    title.as_str(),
                    description.as_deref(),
                    image_url.as_str(),
                    category.as_str(),
                    display_order,
                    timestamp(now)
                ],
            )
            .await?;
        tracing::debug!(%id, display_order, "gallery image created");

        Ok(GalleryImage {
            id,
            title,
            description,
            image_url,
            category,
            display_order,
            visible: true,
            created_at: now,
        })
    }

    async fn set_gallery_visibility(
        &self,
        id: &str,
        visible: bool,
    ) -> Result<GalleryImage, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE gallery SET visible = ?1 WHERE id = ?2",
                libsql::params![i64::from(visible), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(%id, visible, "gallery visibility changed");
        self.get_gallery_image(id).await
    }

    async fn delete_gallery_image(&self, id: &str) -> Result<GalleryImage, DatabaseError> {
        let image = self.get_gallery_image(id).await?;
        self.db()
            .conn()
            .execute("DELETE FROM gallery WHERE id = ?1", [id])
            .await?;
        tracing::debug!(%id, "gallery image deleted");
        Ok(image)
    }

    async fn move_gallery_image(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> Result<GalleryMove, DatabaseError> {
        let mut items = self.list_gallery().await?;
        let plan = plan_move(&mut items, id, direction)?;
        if let Some(plan) = &plan {
            self.apply_move_plan(plan).await?;
            tracing::debug!(%id, %direction, "gallery image moved");
        }
        Ok(GalleryMove { plan, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_image, test_service};
    use pretty_assertions::assert_eq;

    async fn seed(svc: &SiteService, titles: &[&str]) -> Vec<GalleryImage> {
        let mut out = Vec::new();
        for title in titles {
            out.push(svc.create_gallery_image(new_image(title)).await.unwrap());
        }
        out
    }

    fn orders(items: &[GalleryImage]) -> Vec<(String, i64)> {
        items
            .iter()
            .map(|i| (i.title.clone(), i.display_order))
            .collect()
    }

    #[tokio::test]
    async fn create_appends_to_the_end() {
        let svc = test_service().await;
        let created = seed(&svc, &["a", "b", "c"]).await;
        assert_eq!(
            created.iter().map(|i| i.display_order).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(created[0].category, "general");
        assert_eq!(svc.count_gallery().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn create_requires_title() {
        let svc = test_service().await;
        let err = svc.create_gallery_image(new_image("  ")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(svc.count_gallery().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn move_up_swaps_with_previous_only() {
        let svc = test_service().await;
        let seeded = seed(&svc, &["A", "B", "C"]).await;

        let outcome = svc
            .move_gallery_image(&seeded[1].id, MoveDirection::Up)
            .await
            .unwrap();
        let plan = outcome.plan.unwrap();
        assert_eq!(plan.moved.id, seeded[1].id);
        assert_eq!(plan.moved.display_order, 1);
        assert_eq!(plan.neighbor.display_order, 2);

        let stored = svc.list_gallery().await.unwrap();
        assert_eq!(
            orders(&stored),
            vec![("B".into(), 1), ("A".into(), 2), ("C".into(), 3)]
        );
        assert_eq!(orders(&outcome.items), orders(&stored));
    }

    async fn set_order(svc: &SiteService, id: &str, order: i64, created_at: &str) {
        svc.db()
            .conn()
            .execute(
                "UPDATE gallery SET display_order = ?1, created_at = ?2 WHERE id = ?3",
                libsql::params![order, created_at, id],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn move_within_tied_orders_keeps_later_rows_behind() {
        let svc = test_service().await;
        // C is oldest, so a created_at tie-break would favour it over A.
        let seeded = seed(&svc, &["C", "A", "B"]).await;
        set_order(&svc, &seeded[0].id, 6, "2025-01-01T00:00:00.000000Z").await;
        set_order(&svc, &seeded[1].id, 5, "2025-01-02T00:00:00.000000Z").await;
        set_order(&svc, &seeded[2].id, 5, "2025-01-03T00:00:00.000000Z").await;

        let outcome = svc
            .move_gallery_image(&seeded[2].id, MoveDirection::Up)
            .await
            .unwrap();
        assert_eq!(outcome.plan.unwrap().shifted.len(), 1);

        let stored = svc.list_gallery().await.unwrap();
        assert_eq!(
            orders(&stored),
            vec![("B".into(), 5), ("A".into(), 6), ("C".into(), 7)]
        );
        assert_eq!(orders(&outcome.items), orders(&stored));
    }

    #[tokio::test]
    async fn boundary_moves_change_nothing() {
        let svc = test_service().await;
        let seeded = seed(&svc, &["A", "B", "C"]).await;

        let up = svc
            .move_gallery_image(&seeded[0].id, MoveDirection::Up)
            .await
            .unwrap();
        let down = svc
            .move_gallery_image(&seeded[2].id, MoveDirection::Down)
            .await
            .unwrap();
        assert!(up.plan.is_none());
        assert!(down.plan.is_none());
        assert_eq!(
            orders(&svc.list_gallery().await.unwrap()),
            vec![("A".into(), 1), ("B".into(), 2), ("C".into(), 3)]
        );
    }

    #[tokio::test]
    async fn move_unknown_id_is_not_found() {
        let svc = test_service().await;
        seed(&svc, &["A"]).await;
        let err = svc
            .move_gallery_image("img-missing", MoveDirection::Down)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Core(rehab_core::errors::CoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn visibility_filters_public_list() {
        let svc = test_service().await;
        let seeded = seed(&svc, &["A", "B"]).await;
        let hidden = svc.set_gallery_visibility(&seeded[0].id, false).await.unwrap();
        assert!(!hidden.visible);

        let public = svc.list_visible_gallery().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].title, "B");
        assert_eq!(svc.list_gallery().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row() {
        let svc = test_service().await;
        let seeded = seed(&svc, &["A"]).await;
        let deleted = svc.delete_gallery_image(&seeded[0].id).await.unwrap();
        assert_eq!(deleted.image_url, "/uploads/general/A.jpg");
        assert!(matches!(
            svc.get_gallery_image(&seeded[0].id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(
            svc.delete_gallery_image(&seeded[0].id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
