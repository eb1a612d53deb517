use clap::Subcommand;

/// Service commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ServiceCommands {
    /// Create a service. The slug is derived from the title unless given.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        short_description: String,
        /// Long description; a blank value means no detail page.
        #[arg(long)]
        full_description: Option<String>,
    },
    /// Update a service.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        short_description: Option<String>,
        #[arg(long)]
        full_description: Option<String>,
        #[arg(long)]
        display_order: Option<i64>,
    },
    /// Get a service by ID.
    Get { id: String },
    /// List services in display order.
    List,
    /// Delete a service.
    Delete { id: String },
    /// Resolve the public detail page for a slug.
    Page { slug: String },
}
