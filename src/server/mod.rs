pub mod app;
pub mod handlers;

use crate::config::MapConfig;
use crate::render::default_source;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub async fn start_server(port: u16, config: MapConfig, cors_origin: Option<&str>) -> Result<()> {
    let source = Arc::new(default_source(&config)?);
    let app = app::create_app(Arc::new(config), source, cors_origin)?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("Endpoints:");
    info!("  /                           - Map page, feeds fetched per request");
    info!("  /map.geojson                - Styled GeoJSON of the current feeds");
    info!("  /health                     - Health check");
}
