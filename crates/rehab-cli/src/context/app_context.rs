use std::path::Path;

use anyhow::Context;
use rehab_config::RehabConfig;
use rehab_db::service::SiteService;
use rehab_storage::ImageStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SiteService,
    pub images: ImageStore,
    pub config: RehabConfig,
}

impl AppContext {
    /// Open the database and the image store named by `config`.
    pub async fn init(config: RehabConfig) -> anyhow::Result<Self> {
        let service = if config.database.is_remote() {
            SiteService::new_remote(&config.database.url, &config.database.auth_token)
                .await
                .context("failed to connect to remote site database")?
        } else {
            let path = &config.database.path;
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
            SiteService::new_local(path)
                .await
                .with_context(|| format!("failed to open site database at {path}"))?
        };

        let images =
            ImageStore::from_config(&config.storage).context("failed to set up image storage")?;
        if !images.is_enabled() {
            tracing::debug!("image uploads disabled by configuration");
        }

        Ok(Self {
            service,
            images,
            config,
        })
    }
}
