use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rehab dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.dashboard_stats().await?, flags.format)
}
