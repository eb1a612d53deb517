//! Partial-update structs and their builders, plus create inputs.
//!
//! Update fields are `Option`; `None` leaves the column untouched.
//! Nullable columns use `Option<Option<T>>` so callers can clear them.

pub mod condition;
pub mod gallery;
pub mod service;
pub mod settings;
