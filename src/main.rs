//! BootSwatcher demo host.
//!
//! With the `server` feature this serves the built web bundle and the
//! synced theme assets. With the `web` feature it is the WASM demo app.

#[cfg(feature = "server")]
use anyhow::Result;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    use axum::Router;
    use bootswatcher::assets::{sync_assets, AssetLayout};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootswatcher=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BootSwatcher demo host");

    // Load configuration
    let config = bootswatcher::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    if config.sync_on_start {
        sync_assets(&AssetLayout::from(&config)).await?;
    }

    let app = Router::new()
        .nest_service("/themes", ServeDir::new(&config.themes_dir))
        .nest_service("/vendor", ServeDir::new(&config.vendor_dir))
        .fallback_service(ServeDir::new(&config.web_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(bootswatcher::app::App);
}
