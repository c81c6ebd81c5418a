//! Feeds fetched over real HTTP from a local server
#![cfg(feature = "server")]

mod common;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use common::{boundary, collection, quake};
use quakemap::config::{FeedEndpoints, MapConfig};
use quakemap::feed::{FeedSource, FeedState, HttpFeedSource};
use quakemap::render::render_session;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(300);

async fn quakes() -> impl IntoResponse {
    Json(collection(vec![
        quake(json!(4.2), "Ridgecrest, CA", json!([-117.6, 35.7, 8.0])),
        quake(json!(1.1), "Anza, CA", json!([-116.7, 33.5, 14.0])),
    ]))
}

async fn plates() -> impl IntoResponse {
    Json(collection(vec![boundary("AF-AN")]))
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "try later")
}

async fn malformed() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{\"type\": \"FeatureCollection\",")
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(TIMEOUT * 10).await;
    Json(collection(vec![]))
}

async fn spawn_feed_server() -> Result<SocketAddr> {
    let app = Router::new()
        .route("/quakes.geojson", get(quakes))
        .route("/plates.json", get(plates))
        .route("/unavailable", get(unavailable))
        .route("/malformed", get(malformed))
        .route("/slow", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

fn config_for(addr: SocketAddr, earthquakes: &str, tectonic_plates: &str) -> MapConfig {
    MapConfig {
        feeds: FeedEndpoints {
            earthquakes: format!("http://{}{}", addr, earthquakes),
            tectonic_plates: format!("http://{}{}", addr, tectonic_plates),
            timeout_secs: 1,
        },
        ..MapConfig::default()
    }
}

#[tokio::test]
async fn test_both_feeds_render_over_http() -> Result<()> {
    let addr = spawn_feed_server().await?;
    let config = config_for(addr, "/quakes.geojson", "/plates.json");
    let source = HttpFeedSource::new(TIMEOUT)?;

    let (map, report) = render_session(&config, &source).await;

    assert_eq!(report.earthquakes.state, FeedState::Rendered);
    assert_eq!(report.tectonic_plates.state, FeedState::Rendered);
    assert_eq!(map.earthquakes.len(), 2);
    assert_eq!(map.tectonic_plates.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_error_status_fails_only_its_feed() -> Result<()> {
    let addr = spawn_feed_server().await?;
    let config = config_for(addr, "/unavailable", "/plates.json");
    let source = HttpFeedSource::new(TIMEOUT)?;

    let (map, report) = render_session(&config, &source).await;

    assert!(matches!(report.earthquakes.state, FeedState::Failed(_)));
    assert!(map.earthquakes.is_empty());
    assert_eq!(report.tectonic_plates.state, FeedState::Rendered);
    assert_eq!(map.tectonic_plates.len(), 1);

    let err = source
        .fetch(&format!("http://{}/unavailable", addr))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "BAD_STATUS");
    assert!(err.to_string().ends_with("returned status 503"));
    Ok(())
}

#[tokio::test]
async fn test_truncated_body_is_a_malformed_payload() -> Result<()> {
    let addr = spawn_feed_server().await?;
    let config = config_for(addr, "/quakes.geojson", "/malformed");
    let source = HttpFeedSource::new(TIMEOUT)?;

    let (map, report) = render_session(&config, &source).await;

    assert_eq!(report.earthquakes.state, FeedState::Rendered);
    assert!(matches!(report.tectonic_plates.state, FeedState::Failed(_)));
    assert!(map.tectonic_plates.is_empty());

    let err = source
        .fetch(&format!("http://{}/malformed", addr))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_PAYLOAD");
    Ok(())
}

#[tokio::test]
async fn test_slow_feed_times_out() -> Result<()> {
    let addr = spawn_feed_server().await?;
    let config = config_for(addr, "/slow", "/plates.json");
    let source = HttpFeedSource::new(TIMEOUT)?;

    let started = std::time::Instant::now();
    let (map, report) = render_session(&config, &source).await;

    assert!(started.elapsed() < TIMEOUT * 5);
    assert!(matches!(report.earthquakes.state, FeedState::Failed(_)));
    assert!(map.earthquakes.is_empty());
    assert_eq!(report.tectonic_plates.state, FeedState::Rendered);

    let err = source
        .fetch(&format!("http://{}/slow", addr))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "HTTP_ERROR");
    Ok(())
}
