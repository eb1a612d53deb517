use rehab_db::ports::PageViewRepository;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalyticsCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rehab analytics`.
pub async fn handle(
    action: &AnalyticsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnalyticsCommands::Record { path } => {
            let view = ctx.service.record_page_view(path).await?;
            output(
                &json!({ "recorded": view.is_some(), "view": view }),
                flags.format,
            )
        }
        AnalyticsCommands::Summary { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.recent_views);
            output(&ctx.service.analytics_summary(limit).await?, flags.format)
        }
    }
}
