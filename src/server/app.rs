use crate::config::MapConfig;
use crate::feed::FeedSource;
use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{health, map};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MapConfig>,
    pub source: Arc<dyn FeedSource>,
}

pub fn create_app(
    config: Arc<MapConfig>,
    source: Arc<dyn FeedSource>,
    cors_origin: Option<&str>,
) -> Result<Router> {
    let state = AppState { config, source };

    let cors = match cors_origin {
        None | Some("*") => CorsLayer::new().allow_origin(Any),
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<axum::http::HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
    }
    .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
    .allow_headers(Any);

    let app = Router::new()
        .route("/", get(map::map_page))
        .route("/map.geojson", get(map::map_geojson))
        .route("/health", get(health::health_check))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
