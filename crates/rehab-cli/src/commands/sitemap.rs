use rehab_core::sitemap::{sitemap, sitemap_xml};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SitemapArgs;
use crate::context::AppContext;
use crate::output::{output, output_text};

/// Handle `rehab sitemap`.
pub async fn handle(args: &SitemapArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let routes = ctx.service.detail_routes().await?;
    let entries = sitemap(&ctx.config.site.base_url, &routes);
    if args.xml {
        output_text(&sitemap_xml(&entries), flags.format)
    } else {
        output(&entries, flags.format)
    }
}
