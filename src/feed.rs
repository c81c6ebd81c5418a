//! Fetching the two feeds and feeding their features into the overlays.
//!
//! Both fetches are issued together and awaited with `tokio::join!`. Each
//! side owns a disjoint `&mut LayerGroup`, so neither waits for the other and
//! no locking is involved. A failed feed is logged and leaves its overlay
//! empty; it never fails the session.

use crate::config::FeedEndpoints;
use crate::errors::{FeedError, FeedResult};
use crate::feature::collection_features;
use crate::layers::{FeatureReport, LayerGroup, MapComposition};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Earthquakes,
    TectonicPlates,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Earthquakes => f.write_str("earthquakes"),
            FeedKind::TectonicPlates => f.write_str("tectonic plates"),
        }
    }
}

/// `Idle -> Fetching -> {Rendered | Failed}`; there is no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Fetching,
    Rendered,
    Failed(String),
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches and decodes one feed document.
    async fn fetch(&self, location: &str) -> FeedResult<Value>;
}

pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(timeout: Duration) -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FeedError::Http {
                url: String::new(),
                source,
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, location: &str) -> FeedResult<Value> {
        let http_error = |source| FeedError::Http {
            url: location.to_string(),
            source,
        };
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reads feeds from disk; accepts plain paths and `file://` URLs.
pub struct FileFeedSource;

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self, location: &str) -> FeedResult<Value> {
        let path = file_path(location)?;
        let content = tokio::fs::read(&path).await.map_err(|source| FeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_slice(&content)?)
    }
}

fn file_path(location: &str) -> FeedResult<PathBuf> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| FeedError::UnsupportedLocation(location.to_string())),
        _ => Ok(PathBuf::from(location)),
    }
}

/// Dispatches on the location: `http`/`https` go over the network,
/// anything else is read from disk.
pub struct DefaultFeedSource {
    http: HttpFeedSource,
    file: FileFeedSource,
}

impl DefaultFeedSource {
    pub fn new(timeout: Duration) -> FeedResult<Self> {
        Ok(Self {
            http: HttpFeedSource::new(timeout)?,
            file: FileFeedSource,
        })
    }
}

#[async_trait]
impl FeedSource for DefaultFeedSource {
    async fn fetch(&self, location: &str) -> FeedResult<Value> {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                self.http.fetch(location).await
            }
            Ok(url) if url.scheme() == "file" => self.file.fetch(location).await,
            // Windows drive letters parse as a one-letter scheme
            Ok(url) if url.scheme().len() > 1 => {
                Err(FeedError::UnsupportedLocation(location.to_string()))
            }
            _ => self.file.fetch(location).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedOutcome {
    pub kind: FeedKind,
    /// Final state, always `Rendered` or `Failed`.
    pub state: FeedState,
    /// Every state the feed passed through, ending with `state`.
    pub history: Vec<FeedState>,
    pub features: FeatureReport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedReport {
    pub earthquakes: FeedOutcome,
    pub tectonic_plates: FeedOutcome,
}

impl FeedReport {
    pub fn all_rendered(&self) -> bool {
        self.earthquakes.state == FeedState::Rendered
            && self.tectonic_plates.state == FeedState::Rendered
    }
}

/// Fetches both feeds concurrently and populates the matching overlays.
pub async fn load_feeds(
    composition: &mut MapComposition,
    endpoints: &FeedEndpoints,
    source: &dyn FeedSource,
) -> FeedReport {
    let MapComposition {
        earthquakes,
        tectonic_plates,
        ..
    } = composition;

    info!("Fetching feeds");
    let (earthquakes, tectonic_plates) = tokio::join!(
        load_feed(
            FeedKind::Earthquakes,
            &endpoints.earthquakes,
            source,
            earthquakes
        ),
        load_feed(
            FeedKind::TectonicPlates,
            &endpoints.tectonic_plates,
            source,
            tectonic_plates
        ),
    );

    FeedReport {
        earthquakes,
        tectonic_plates,
    }
}

async fn load_feed(
    kind: FeedKind,
    location: &str,
    source: &dyn FeedSource,
    group: &mut LayerGroup,
) -> FeedOutcome {
    let mut history = vec![FeedState::Idle];

    debug!("Feed {}: fetching {}", kind, location);
    history.push(FeedState::Fetching);

    let (state, features) = match source.fetch(location).await.and_then(collection_features) {
        Ok(features) => {
            let report = match kind {
                FeedKind::Earthquakes => group.add_earthquakes(&features),
                FeedKind::TectonicPlates => group.add_boundaries(&features),
            };
            info!(
                "Feed {}: {} of {} features rendered into '{}'",
                kind,
                report.rendered,
                features.len(),
                group.name
            );
            (FeedState::Rendered, report)
        }
        Err(err) => {
            warn!("Feed {} failed: {}", kind, err);
            (FeedState::Failed(err.to_string()), FeatureReport::default())
        }
    };
    history.push(state.clone());

    FeedOutcome {
        kind,
        state,
        history,
        features,
    }
}
