//! Entity records for every persisted collection.
//!
//! Each entity maps to one table in the site database. All records derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so they can be printed by the
//! CLI and described by `rehab schema`.

mod condition;
mod gallery;
mod message;
mod page_view;
mod service;
mod settings;

pub use condition::{ClinicalCondition, DEFAULT_CONDITION_CATEGORY};
pub use gallery::GalleryImage;
pub use message::ContactMessage;
pub use page_view::PageView;
pub use service::Service;
pub use settings::{
    DEFAULT_GALLERY_ENABLED, DEFAULT_MAX_GALLERY_IMAGES, MAX_GALLERY_IMAGES_LIMIT, SiteSettings,
};
