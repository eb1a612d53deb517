use rehab_core::entities::GalleryImage;
use rehab_db::ports::GalleryRepository;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GalleryListResponse {
    images: Vec<GalleryImage>,
}

pub async fn run(all: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let images = if all {
        ctx.service.list_gallery().await?
    } else {
        ctx.service.list_visible_gallery().await?
    };
    output(&GalleryListResponse { images }, flags.format)
}
