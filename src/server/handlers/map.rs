//! Every request is a fresh session: both feeds are fetched again and the
//! composition rebuilt from scratch.

use crate::config::ExportFileType;
use crate::export;
use crate::render::render_session;
use crate::server::app::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::error;

async fn render_current(state: &AppState, exporter: ExportFileType) -> Result<String, StatusCode> {
    let (composition, _report) = render_session(&state.config, state.source.as_ref()).await;
    export::render(&composition, exporter).map_err(|e| {
        error!("Failed to render {:?}: {}", exporter, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn map_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_current(&state, ExportFileType::Html).await.map(Html)
}

pub async fn map_geojson(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let body = render_current(&state, ExportFileType::GeoJson).await?;
    Ok(([(header::CONTENT_TYPE, "application/geo+json")], body).into_response())
}
