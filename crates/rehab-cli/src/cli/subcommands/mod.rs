mod admin;
mod analytics;
mod condition;
mod gallery;
mod message;
mod service;
mod settings;

pub use admin::AdminCommands;
pub use analytics::AnalyticsCommands;
pub use condition::ConditionCommands;
pub use gallery::GalleryCommands;
pub use message::MessageCommands;
pub use service::ServiceCommands;
pub use settings::{SettingsCommands, SettingsSetArgs};
