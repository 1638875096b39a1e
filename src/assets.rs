//! Theme asset sync
//!
//! Copies the Bootstrap and Bootswatch dist files out of an installed
//! `node_modules` tree into the layout the switcher expects:
//!
//! ```text
//! themes/bootstrap.min.css
//! themes/<name>/bootstrap.min.css   (plus the other dist files)
//! themes/themes.json                (sorted list of <name>s)
//! vendor/bootstrap.bundle.min.js
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::config::ServerConfig;

/// Catalog file written next to the themes
pub const CATALOG_FILE: &str = "themes.json";

/// Source and destination directories for a sync
#[derive(Debug, Clone)]
pub struct AssetLayout {
    pub node_modules: PathBuf,
    pub themes_dir: PathBuf,
    pub vendor_dir: PathBuf,
}

impl From<&ServerConfig> for AssetLayout {
    fn from(config: &ServerConfig) -> Self {
        Self {
            node_modules: config.node_modules.clone(),
            themes_dir: config.themes_dir.clone(),
            vendor_dir: config.vendor_dir.clone(),
        }
    }
}

impl AssetLayout {
    fn bootstrap_css(&self) -> PathBuf {
        self.node_modules
            .join("bootstrap")
            .join("dist")
            .join("css")
            .join("bootstrap.min.css")
    }

    fn bootstrap_js(&self) -> PathBuf {
        self.node_modules
            .join("bootstrap")
            .join("dist")
            .join("js")
            .join("bootstrap.bundle.min.js")
    }

    fn bootswatch_dist(&self) -> PathBuf {
        self.node_modules.join("bootswatch").join("dist")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.themes_dir.join(CATALOG_FILE)
    }
}

/// Outcome of a sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Bootswatch themes copied, sorted
    pub themes: Vec<String>,
    pub files_copied: usize,
}

/// Copy all theme assets and write the catalog.
pub async fn sync_assets(layout: &AssetLayout) -> Result<SyncReport> {
    ensure_dirs(layout).await?;
    copy_bootstrap_assets(layout).await?;
    let (themes, theme_files) = copy_bootswatch_themes(layout).await?;
    write_catalog(&layout.catalog_path(), &themes).await?;

    info!(
        themes = themes.len(),
        catalog = %layout.catalog_path().display(),
        "Theme assets synced"
    );
    Ok(SyncReport {
        themes,
        files_copied: theme_files + 2,
    })
}

async fn ensure_dirs(layout: &AssetLayout) -> Result<()> {
    for dir in [&layout.themes_dir, &layout.vendor_dir] {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

async fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest)
        .await
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
    debug!(src = %src.display(), dest = %dest.display(), "Copied");
    Ok(())
}

async fn copy_bootstrap_assets(layout: &AssetLayout) -> Result<()> {
    copy_file(
        &layout.bootstrap_css(),
        &layout.themes_dir.join("bootstrap.min.css"),
    )
    .await?;
    copy_file(
        &layout.bootstrap_js(),
        &layout.vendor_dir.join("bootstrap.bundle.min.js"),
    )
    .await?;
    info!("Copied Bootstrap CSS & JS");
    Ok(())
}

/// Copy each `bootswatch/dist/<name>/` directory's files into `themes/<name>/`.
/// Returns the sorted theme names and the number of files copied.
async fn copy_bootswatch_themes(layout: &AssetLayout) -> Result<(Vec<String>, usize)> {
    let src_base = layout.bootswatch_dist();
    let mut entries = fs::read_dir(&src_base)
        .await
        .with_context(|| format!("Failed to read {}", src_base.display()))?;

    let mut themes = Vec::new();
    let mut copied = 0;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let dest_dir = layout.themes_dir.join(&name);
        fs::create_dir_all(&dest_dir)
            .await
            .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

        let mut files = fs::read_dir(entry.path()).await?;
        while let Some(file) = files.next_entry().await? {
            if file.file_type().await?.is_file() {
                copy_file(&file.path(), &dest_dir.join(file.file_name())).await?;
                copied += 1;
            }
        }
        themes.push(name);
    }

    themes.sort();
    info!(count = themes.len(), "Copied Bootswatch themes");
    Ok((themes, copied))
}

async fn write_catalog(path: &Path, themes: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(themes)?;
    fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
