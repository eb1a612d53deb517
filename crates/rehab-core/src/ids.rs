//! ID prefix constants.
//!
//! Every row except the settings singleton carries a prefixed ID such as
//! `cnd-a3f8b2c1`: a three-letter entity prefix, a dash, and eight hex
//! characters generated by the database.

pub const PREFIX_GALLERY: &str = "img";
pub const PREFIX_CONDITION: &str = "cnd";
pub const PREFIX_SERVICE: &str = "svc";
pub const PREFIX_MESSAGE: &str = "msg";
pub const PREFIX_PAGE_VIEW: &str = "pvw";

/// All prefixes, in table order.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_GALLERY,
    PREFIX_CONDITION,
    PREFIX_SERVICE,
    PREFIX_MESSAGE,
    PREFIX_PAGE_VIEW,
];

/// Fixed primary key of the `site_settings` row.
pub const SETTINGS_ID: i64 = 1;
