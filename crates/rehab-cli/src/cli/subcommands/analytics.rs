use clap::Subcommand;

/// Page view commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// Record one public page view. Admin paths are ignored.
    Record { path: String },
    /// Total views, busiest paths, and the most recent views.
    Summary {
        #[arg(long)]
        limit: Option<u32>,
    },
}
