use rehab_config::RehabConfig;
use rehab_core::sitemap::robots;

use crate::cli::GlobalFlags;
use crate::output::output_text;

/// Handle `rehab robots`.
pub fn handle(config: &RehabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_text(&robots(&config.site.base_url), flags.format)
}
