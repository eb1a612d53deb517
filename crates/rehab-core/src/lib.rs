//! # rehab-core
//!
//! Core types and content rules for the clinic site.
//!
//! This crate provides the foundational types shared across all crates:
//! - Entity records for every persisted collection (settings, gallery,
//!   conditions, services, contact messages, page views)
//! - Slug generation and detail-page eligibility
//! - Gallery reorder planning and upload gating
//! - Contact-info fallbacks used by public pages
//! - Admin route gating and form validation
//! - Sitemap and robots generation
//! - Cross-cutting error types

pub mod access;
pub mod contact;
pub mod detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod gallery;
pub mod ids;
pub mod reorder;
pub mod responses;
pub mod sitemap;
pub mod slug;
pub mod validation;
