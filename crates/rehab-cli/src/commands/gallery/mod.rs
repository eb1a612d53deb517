mod add;
mod delete;
mod list;
mod reorder;

use rehab_db::ports::GalleryRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GalleryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rehab gallery`.
pub async fn handle(
    action: &GalleryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GalleryCommands::List { all } => list::run(*all, ctx, flags).await,
        GalleryCommands::Add {
            file,
            title,
            category,
            description,
        } => {
            add::run(
                file,
                title,
                category.as_deref(),
                description.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        GalleryCommands::Move { id, direction } => reorder::run(id, direction, ctx, flags).await,
        GalleryCommands::Toggle { id, show, hide } => {
            let visible = if *show || *hide {
                *show
            } else {
                !ctx.service.get_gallery_image(id).await?.visible
            };
            let image = ctx.service.set_gallery_visibility(id, visible).await?;
            output(&image, flags.format)
        }
        GalleryCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
