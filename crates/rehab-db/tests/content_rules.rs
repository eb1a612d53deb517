//! Content rules exercised through the public API on an in-memory database.
//!
//! - Settings singleton: lazy creation, single row, partial saves
//! - Slug guard across create and update
//! - Gallery reorder: neighbor swap, boundaries, legacy equal orders
//! - Contact form: validation before write

use pretty_assertions::assert_eq;
use rehab_core::enums::MoveDirection;
use rehab_core::validation::ContactForm;
use rehab_db::error::DatabaseError;
use rehab_db::ports::{
    ConditionRepository, GalleryRepository, MessageRepository, ServiceRepository,
};
use rehab_db::resolver::SettingsResolver;
use rehab_db::service::SiteService;
use rehab_db::updates::condition::{ConditionUpdateBuilder, NewCondition};
use rehab_db::updates::gallery::NewGalleryImage;
use rehab_db::updates::service::NewService;
use rehab_db::updates::settings::SettingsUpdateBuilder;

async fn test_service() -> SiteService {
    SiteService::new_local(":memory:").await.unwrap()
}

fn image(title: &str) -> NewGalleryImage {
    NewGalleryImage {
        title: title.into(),
        description: Some("Therapy room".into()),
        image_url: format!("/uploads/facility/{title}.png"),
        category: Some("Facility".into()),
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn settings_singleton_survives_many_saves() {
    let svc = test_service().await;
    let resolver = SettingsResolver::new(&svc);

    for max in [10, 20, 30] {
        resolver
            .save(&SettingsUpdateBuilder::new().max_gallery_images(max).build())
            .await
            .unwrap();
    }
    let settings = resolver.get().await.unwrap();
    assert_eq!(settings.max_gallery_images, 30);

    let mut rows = svc
        .db()
        .conn()
        .query("SELECT id FROM site_settings", ())
        .await
        .unwrap();
    let mut ids = Vec::new();
    while let Some(row) = rows.next().await.unwrap() {
        ids.push(row.get::<i64>(0).unwrap());
    }
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn whatsapp_link_uses_stored_number() {
    let svc = test_service().await;
    let resolver = SettingsResolver::new(&svc);
    resolver
        .save(
            &SettingsUpdateBuilder::new()
                .whatsapp_number(Some("+91 98765 43210".into()))
                .build(),
        )
        .await
        .unwrap();
    let info = resolver.contact_info().await;
    assert_eq!(
        info.whatsapp_url("Hi there"),
        "https://wa.me/919876543210?text=Hi%20there"
    );
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_condition_with_same_slug_is_rejected() {
    let svc = test_service().await;
    let first = svc
        .create_condition(NewCondition {
            name: "Down Syndrome".into(),
            category: Some("Pediatric".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = svc
        .create_condition(NewCondition {
            name: "Other".into(),
            slug: Some("down-syndrome".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("down-syndrome"));

    let resaved = svc
        .update_condition(
            &first.id,
            ConditionUpdateBuilder::new().slug("down-syndrome").build(),
        )
        .await
        .unwrap();
    assert_eq!(resaved.id, first.id);
}

#[tokio::test]
async fn service_with_unsluggable_title_is_rejected() {
    let svc = test_service().await;
    let err = svc
        .create_service(NewService {
            title: "!!!".into(),
            short_description: "Short".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

// ---------------------------------------------------------------------------
// Gallery reorder
// ---------------------------------------------------------------------------

#[tokio::test]
async fn move_down_then_up_restores_order() {
    let svc = test_service().await;
    let a = svc.create_gallery_image(image("a")).await.unwrap();
    svc.create_gallery_image(image("b")).await.unwrap();
    svc.create_gallery_image(image("c")).await.unwrap();

    let moved = svc
        .move_gallery_image(&a.id, MoveDirection::Down)
        .await
        .unwrap();
    let titles: Vec<_> = moved.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "a", "c"]);

    svc.move_gallery_image(&a.id, MoveDirection::Up).await.unwrap();
    let titles: Vec<_> = svc
        .list_gallery()
        .await
        .unwrap()
        .into_iter()
        .map(|i| (i.title, i.display_order))
        .collect();
    assert_eq!(
        titles,
        vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
    );
}

#[tokio::test]
async fn legacy_equal_orders_still_move() {
    let svc = test_service().await;
    let a = svc.create_gallery_image(image("a")).await.unwrap();
    let b = svc.create_gallery_image(image("b")).await.unwrap();
    svc.db()
        .conn()
        .execute("UPDATE gallery SET display_order = 5", ())
        .await
        .unwrap();

    svc.move_gallery_image(&b.id, MoveDirection::Up).await.unwrap();
    let stored = svc.list_gallery().await.unwrap();
    assert_eq!(stored[0].id, b.id);
    assert_eq!(stored[1].id, a.id);
    assert!(stored[0].display_order < stored[1].display_order);
}

#[tokio::test]
async fn category_is_normalized_on_create() {
    let svc = test_service().await;
    let img = svc.create_gallery_image(image("a")).await.unwrap();
    assert_eq!(img.category, "facility");
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_submission_sets_created_at_and_rejects_missing_email() {
    let svc = test_service().await;
    let ok = svc
        .submit_contact(&ContactForm {
            name: Some("Arun".into()),
            email: Some("arun@example.com".into()),
            phone: Some("98650 00000".into()),
            subject: None,
            message: Some("Do you offer home visits?".into()),
        })
        .await
        .unwrap();
    assert_eq!(svc.list_messages(50).await.unwrap(), vec![ok]);

    let err = svc
        .submit_contact(&ContactForm {
            name: Some("Arun".into()),
            message: Some("No email".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Core(_)));
    assert_eq!(svc.list_messages(50).await.unwrap().len(), 1);
}
