use rehab_core::slug::slugify;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SlugifyArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SlugResponse<'a> {
    text: &'a str,
    slug: String,
}

/// Handle `rehab slugify`.
pub fn handle(args: &SlugifyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let slug = slugify(&args.text);
    if slug.is_empty() {
        anyhow::bail!("'{}' has no letters or digits to build a slug from", args.text);
    }
    output(
        &SlugResponse {
            text: &args.text,
            slug,
        },
        flags.format,
    )
}
