//! libSQL implementations of the repository traits.
//!
//! Each module adds an `impl <Trait> for SiteService` block.

pub mod conditions;
pub mod gallery;
pub mod messages;
pub mod page_views;
pub mod services;
pub mod settings;
pub mod slugs;
pub mod stats;
