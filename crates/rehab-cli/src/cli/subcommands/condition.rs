use clap::Subcommand;

/// Clinical condition commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConditionCommands {
    /// Create a condition. The slug is derived from the name unless given.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, default_value = rehab_core::entities::DEFAULT_CONDITION_CATEGORY)]
        category: String,
        /// Long description; a blank value means no detail page.
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a condition.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        display_order: Option<i64>,
    },
    /// Get a condition by ID.
    Get { id: String },
    /// List conditions in display order.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a condition.
    Delete { id: String },
    /// Resolve the public detail page for a slug.
    Page { slug: String },
    /// Distinct categories in use.
    Categories,
}
