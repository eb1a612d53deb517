use std::path::Path;

use anyhow::Context;
use rehab_core::entities::GalleryImage;
use rehab_core::gallery::{check_upload_allowed, normalize_category};
use rehab_core::validation::require;
use rehab_db::ports::{GalleryRepository, SettingsStore};
use rehab_db::resolver::SettingsResolver;
use rehab_db::updates::gallery::NewGalleryImage;
use rehab_storage::naming::check_size;
use rehab_storage::{ImageStore, StoredImage};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One image submitted through the admin upload form.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddedImage {
    pub image: GalleryImage,
    pub stored: StoredImage,
}

/// Settings gate, form checks, upload, then the gallery row.
///
/// Nothing is uploaded unless the gate and the form pass. If the row cannot
/// be written the uploaded object is deleted again.
pub async fn add_image<R>(
    repo: &R,
    images: &ImageStore,
    request: UploadRequest,
) -> anyhow::Result<AddedImage>
where
    R: GalleryRepository + SettingsStore,
{
    let settings = SettingsResolver::new(repo).get().await?;
    check_upload_allowed(&settings, repo.count_gallery().await?)?;

    let title = require(Some(request.title.as_str()), "Title")?.to_string();
    let category = normalize_category(request.category.as_deref());
    let stored = images
        .upload(&category, &request.file_name, request.bytes)
        .await?;

    let created = repo
        .create_gallery_image(NewGalleryImage {
            title,
            description: request.description,
            image_url: stored.url.clone(),
            category: Some(category),
        })
        .await;

    match created {
        Ok(image) => {
            tracing::debug!(id = %image.id, key = %stored.key, "gallery image added");
            Ok(AddedImage { image, stored })
        }
        Err(error) => {
            if let Err(cleanup) = images.delete(&stored.key).await {
                tracing::warn!(key = %stored.key, error = %cleanup, "failed to remove orphaned upload");
            }
            Err(error).context("failed to save gallery image")
        }
    }
}

/// Read an image from disk, refusing oversized files before loading them.
async fn read_upload(path: &Path, max_bytes: u64) -> anyhow::Result<(String, Vec<u8>)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("'{}' does not name a file", path.display()))?
        .to_string();
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    check_size(metadata.len(), max_bytes)?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((file_name, bytes))
}

pub async fn run(
    file: &str,
    title: &str,
    category: Option<&str>,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (file_name, bytes) =
        read_upload(Path::new(file), ctx.images.max_upload_bytes()).await?;

    let added = add_image(
        &ctx.service,
        &ctx.images,
        UploadRequest {
            file_name,
            bytes,
            title: title.to_string(),
            category: category.map(str::to_string),
            description: description.map(str::to_string),
        },
    )
    .await?;
    output(&added, flags.format)
}
