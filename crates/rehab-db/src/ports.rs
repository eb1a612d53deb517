//! Repository traits, one per entity store.
//!
//! The content rules are written against these traits so they can be tested
//! with fakes. [`crate::service::SiteService`] is the libSQL implementation.

use std::future::Future;

use rehab_core::entities::{
    ClinicalCondition, ContactMessage, GalleryImage, PageView, Service, SiteSettings,
};
use rehab_core::enums::{ContentKind, MoveDirection};
use rehab_core::reorder::MovePlan;
use rehab_core::responses::AnalyticsSummary;
use rehab_core::validation::ContactForm;

use crate::error::DatabaseError;
use crate::updates::condition::{ConditionUpdate, NewCondition};
use crate::updates::gallery::NewGalleryImage;
use crate::updates::service::{NewService, ServiceUpdate};
use crate::updates::settings::SettingsUpdate;

/// Raw access to the settings singleton.
///
/// Implementations always address the fixed settings id.
pub trait SettingsStore {
    /// The stored row, if it exists.
    fn fetch_settings(&self) -> impl Future<Output = Result<Option<SiteSettings>, DatabaseError>>;

    /// Insert `defaults` unless a row already exists.
    fn insert_settings_if_absent(
        &self,
        defaults: &SiteSettings,
    ) -> impl Future<Output = Result<(), DatabaseError>>;

    /// Apply a partial update to the existing row.
    fn write_settings(
        &self,
        update: &SettingsUpdate,
    ) -> impl Future<Output = Result<(), DatabaseError>>;
}

/// Lookup used by the slug uniqueness guard.
pub trait SlugIndex {
    /// Whether a record of `kind` other than `exclude_id` owns `slug`.
    fn slug_taken(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> impl Future<Output = Result<bool, DatabaseError>>;
}

/// Result of a gallery move: the plan that was persisted (if any) and the
/// list in its new order.
#[derive(Debug, Clone)]
pub struct GalleryMove {
    pub plan: Option<MovePlan>,
    pub items: Vec<GalleryImage>,
}

pub trait GalleryRepository {
    /// Every image in admin order: `(display_order, created_at, id)`.
    fn list_gallery(&self) -> impl Future<Output = Result<Vec<GalleryImage>, DatabaseError>>;

    /// Visible images only, same order.
    fn list_visible_gallery(
        &self,
    ) -> impl Future<Output = Result<Vec<GalleryImage>, DatabaseError>>;

    fn get_gallery_image(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<GalleryImage, DatabaseError>>;

    fn count_gallery(&self) -> impl Future<Output = Result<u64, DatabaseError>>;

    /// Insert at the end of the list.
    fn create_gallery_image(
        &self,
        input: NewGalleryImage,
    ) -> impl Future<Output = Result<GalleryImage, DatabaseError>>;

    fn set_gallery_visibility(
        &self,
        id: &str,
        visible: bool,
    ) -> impl Future<Output = Result<GalleryImage, DatabaseError>>;

    /// Delete the row and return it so the caller can remove the stored file.
    fn delete_gallery_image(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<GalleryImage, DatabaseError>>;

    /// Move one image a single step. Boundary moves change nothing.
    fn move_gallery_image(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> impl Future<Output = Result<GalleryMove, DatabaseError>>;
}

pub trait ConditionRepository {
    fn create_condition(
        &self,
        input: NewCondition,
    ) -> impl Future<Output = Result<ClinicalCondition, DatabaseError>>;

    fn get_condition(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ClinicalCondition, DatabaseError>>;

    fn get_condition_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<ClinicalCondition>, DatabaseError>>;

    fn list_conditions(
        &self,
    ) -> impl Future<Output = Result<Vec<ClinicalCondition>, DatabaseError>>;

    fn list_conditions_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<ClinicalCondition>, DatabaseError>>;

    /// Distinct non-null categories, alphabetical.
    fn condition_categories(&self) -> impl Future<Output = Result<Vec<String>, DatabaseError>>;

    fn update_condition(
        &self,
        id: &str,
        update: ConditionUpdate,
    ) -> impl Future<Output = Result<ClinicalCondition, DatabaseError>>;

    fn delete_condition(&self, id: &str) -> impl Future<Output = Result<(), DatabaseError>>;
}

pub trait ServiceRepository {
    fn create_service(
        &self,
        input: NewService,
    ) -> impl Future<Output = Result<Service, DatabaseError>>;

    fn get_service(&self, id: &str) -> impl Future<Output = Result<Service, DatabaseError>>;

    fn get_service_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Service>, DatabaseError>>;

    fn list_services(&self) -> impl Future<Output = Result<Vec<Service>, DatabaseError>>;

    fn update_service(
        &self,
        id: &str,
        update: ServiceUpdate,
    ) -> impl Future<Output = Result<Service, DatabaseError>>;

    fn delete_service(&self, id: &str) -> impl Future<Output = Result<(), DatabaseError>>;
}

pub trait MessageRepository {
    /// Validate and store a contact form submission.
    fn submit_contact(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<ContactMessage, DatabaseError>>;

    /// Newest first.
    fn list_messages(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<ContactMessage>, DatabaseError>>;

    fn get_message(&self, id: &str)
    -> impl Future<Output = Result<ContactMessage, DatabaseError>>;

    fn delete_message(&self, id: &str) -> impl Future<Output = Result<(), DatabaseError>>;
}

pub trait PageViewRepository {
    /// Record a public page view. Admin paths return `Ok(None)`.
    fn record_page_view(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Option<PageView>, DatabaseError>>;

    fn analytics_summary(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<AnalyticsSummary, DatabaseError>>;
}
