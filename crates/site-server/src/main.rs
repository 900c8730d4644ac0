//! Shuttle website server
//!
//! Serves the compiled Leptos frontend under the configured base path.

mod handlers;
mod routes;
mod state;

use site_core::SiteConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env()?;

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            "⚠ No index.html in {} - build the frontend with `trunk build` first",
            config.static_dir.display()
        );
    }

    let app = routes::build_router(&config);
    let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;

    let base = if config.base_path.is_empty() { "/" } else { config.base_path.as_str() };
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 site-server running on http://{}{}", config.bind_addr, base);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  {:<7} - Frontend from {}", base, config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
