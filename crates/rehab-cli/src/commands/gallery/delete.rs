use rehab_db::ports::GalleryRepository;
use rehab_storage::ImageStore;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Remove the stored file behind `image_url` when this store owns it.
///
/// The row is already gone at this point, so a failure here is logged and
/// leaves an orphaned object rather than failing the command.
pub async fn remove_stored_file(images: &ImageStore, image_url: &str) -> bool {
    if !images.is_enabled() {
        tracing::debug!(%image_url, "image storage disabled; keeping stored file");
        return false;
    }
    let Some(key) = images.key_for_url(image_url) else {
        tracing::debug!(%image_url, "image url is not managed by this store");
        return false;
    };
    match images.delete(&key).await {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%key, %error, "failed to delete stored image");
            false
        }
    }
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let image = ctx.service.delete_gallery_image(id).await?;
    let file_removed = remove_stored_file(&ctx.images, &image.image_url).await;
    output(
        &json!({ "deleted": image, "file_removed": file_removed }),
        flags.format,
    )
}
