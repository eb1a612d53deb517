pub mod admin;
pub mod analytics;
pub mod condition;
pub mod dashboard;
pub mod dispatch;
pub mod gallery;
pub mod message;
pub mod robots;
pub mod schema;
pub mod service;
pub mod settings;
pub mod shared;
pub mod sitemap;
pub mod slugify;
