use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, AnalyticsCommands, ConditionCommands, GalleryCommands, MessageCommands,
    ServiceCommands, SettingsCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Site-wide settings (single row).
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Gallery images.
    Gallery {
        #[command(subcommand)]
        action: GalleryCommands,
    },
    /// Clinical conditions.
    Condition {
        #[command(subcommand)]
        action: ConditionCommands,
    },
    /// Therapy services.
    Service {
        #[command(subcommand)]
        action: ServiceCommands,
    },
    /// Contact form messages.
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },
    /// Page view analytics.
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
    /// Admin route gate and login form checks.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Record counts for the admin dashboard.
    Dashboard,
    /// Sitemap of public routes and detail pages.
    Sitemap(SitemapArgs),
    /// robots.txt for the configured site URL.
    Robots,
    /// Print the slug derived from a name.
    Slugify(SlugifyArgs),
    /// Dump the JSON schema of a record type.
    Schema(SchemaArgs),
}

/// Arguments for `rehab sitemap`.
#[derive(Clone, Debug, Args)]
pub struct SitemapArgs {
    /// Emit sitemap XML instead of structured entries.
    #[arg(long)]
    pub xml: bool,
}

/// Arguments for `rehab slugify`.
#[derive(Clone, Debug, Args)]
pub struct SlugifyArgs {
    pub text: String,
}

/// Arguments for `rehab schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type name (e.g. `site_settings`, `gallery_image`). Omit to list names.
    pub type_name: Option<String>,
}
