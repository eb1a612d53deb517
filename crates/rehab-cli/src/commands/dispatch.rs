use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags).await,
        Commands::Gallery { action } => commands::gallery::handle(&action, ctx, flags).await,
        Commands::Condition { action } => commands::condition::handle(&action, ctx, flags).await,
        Commands::Service { action } => commands::service::handle(&action, ctx, flags).await,
        Commands::Message { action } => commands::message::handle(&action, ctx, flags).await,
        Commands::Analytics { action } => commands::analytics::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Sitemap(args) => commands::sitemap::handle(&args, ctx, flags).await,
        Commands::Robots
        | Commands::Slugify(_)
        | Commands::Schema(_)
        | Commands::Admin { .. } => {
            unreachable!("robots/slugify/schema/admin are pre-dispatched in main")
        }
    }
}
