//! HTTP server for the Proof Cellars site.

mod routes;
mod seo;
mod state;

use std::env;

use anyhow::{Context, Result};
use proof_cellars_shared::{logging::init_tracing, ContentSnapshot, ContentStore, SiteConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let content_dir = env::var("CONTENT_DIR").unwrap_or_else(|_| "./content".to_string());
    let site = SiteConfig::from_env();

    tracing::info!("Starting Proof Cellars backend server");
    tracing::info!("Content directory: {}", content_dir);
    tracing::info!("Site base URL: {}", site.base_url);

    let store = ContentStore::open(&content_dir)
        .with_context(|| format!("failed to open content directory {content_dir}"))?;
    let snapshot = ContentSnapshot::load(&store).context("failed to load content snapshot")?;
    let app_state = state::AppState::new(snapshot, site);

    let app = routes::create_router(app_state);

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let addr = format!("{}:{}", bind_addr, port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
