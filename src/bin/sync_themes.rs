//! Copy Bootstrap and Bootswatch assets into the themes directory and
//! write the theme catalog.
//!
//! Run after installing the npm packages:
//!   npm install bootstrap@^5 bootswatch@^5
//!   cargo run --bin sync-themes
//!
//! Paths come from `bootswatcher.toml` or `BOOTSWATCHER_*` environment
//! variables (see `ServerConfig`).

use anyhow::Result;
use bootswatcher::assets::{sync_assets, AssetLayout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootswatcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = bootswatcher::config::load_config()?;
    let layout = AssetLayout::from(&config);
    let report = sync_assets(&layout).await?;

    println!(
        "Copied {} Bootswatch themes ({} files) and wrote {}",
        report.themes.len(),
        report.files_copied,
        layout.catalog_path().display()
    );
    Ok(())
}
