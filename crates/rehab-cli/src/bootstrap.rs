use std::path::{Path, PathBuf};

use anyhow::Context;
use rehab_config::RehabConfig;

/// Switch into the project root so relative config and database paths
/// resolve against it.
pub fn enter_project(project: Option<&str>) -> anyhow::Result<()> {
    let Some(project) = project else {
        return Ok(());
    };
    let root = project_root(Path::new(project));
    if !root.is_dir() {
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            root.display()
        );
    }
    std::env::set_current_dir(&root)
        .with_context(|| format!("failed to enter project directory {}", root.display()))
}

/// Accept either the project directory or its `.rehab` directory.
fn project_root(path: &Path) -> PathBuf {
    if path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == ".rehab")
    {
        return path.parent().map_or_else(|| path.to_path_buf(), Path::to_path_buf);
    }
    path.to_path_buf()
}

/// Load `.env`, then the layered config, and refuse to start on an unusable
/// config.
pub fn load_config() -> anyhow::Result<RehabConfig> {
    let env_path = PathBuf::from(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let config = RehabConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::project_root;
    use std::path::{Path, PathBuf};

    #[test]
    fn rehab_dir_maps_to_its_parent() {
        assert_eq!(
            project_root(Path::new("/srv/site/.rehab")),
            PathBuf::from("/srv/site")
        );
        assert_eq!(project_root(Path::new("/srv/site")), PathBuf::from("/srv/site"));
    }
}
