use rehab_core::entities::GalleryImage;
use rehab_core::enums::MoveDirection;
use rehab_db::ports::GalleryRepository;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MoveResponse {
    moved: bool,
    direction: MoveDirection,
    images: Vec<GalleryImage>,
}

pub async fn run(
    id: &str,
    direction: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let direction = parse_enum::<MoveDirection>(direction, "direction")?;
    let outcome = ctx.service.move_gallery_image(id, direction).await?;
    if outcome.plan.is_none() {
        tracing::debug!(%id, %direction, "image already at the edge; nothing moved");
    }
    output(
        &MoveResponse {
            moved: outcome.plan.is_some(),
            direction,
            images: outcome.items,
        },
        flags.format,
    )
}
