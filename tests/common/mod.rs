#![allow(dead_code)]

use async_trait::async_trait;
use quakemap::errors::{FeedError, FeedResult};
use quakemap::feed::FeedSource;
use serde_json::{json, Value};
use std::collections::HashMap;

pub const QUAKES: &str = "https://feeds.test/quakes.geojson";
pub const PLATES: &str = "https://feeds.test/plates.json";

/// Serves canned documents; unknown locations answer 404.
#[derive(Default)]
pub struct StaticFeedSource {
    documents: HashMap<String, Value>,
}

impl StaticFeedSource {
    pub fn with(mut self, location: &str, document: Value) -> Self {
        self.documents.insert(location.to_string(), document);
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self, location: &str) -> FeedResult<Value> {
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| FeedError::Status {
                url: location.to_string(),
                status: 404,
            })
    }
}

pub fn quake(mag: Value, place: &str, coordinates: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": { "mag": mag, "place": place },
        "geometry": { "type": "Point", "coordinates": coordinates }
    })
}

pub fn boundary(name: &str) -> Value {
    json!({
        "type": "Feature",
        "properties": { "LAYER": "plate boundary", "Name": name },
        "geometry": {
            "type": "LineString",
            "coordinates": [[-0.43, -54.85], [-0.04, -54.67], [0.41, -54.49]]
        }
    })
}

pub fn collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

pub fn sample_source() -> StaticFeedSource {
    StaticFeedSource::default()
        .with(
            QUAKES,
            collection(vec![
                quake(json!(5.0), "Los Angeles, CA", json!([-118.2, 34.0, 12])),
                quake(json!(0), "Deep event", json!([178.1, -17.9, 95])),
                quake(json!(2.31), "7 km NW of The Geysers, CA", json!([-122.8, 38.8, 1.9])),
            ]),
        )
        .with(PLATES, collection(vec![boundary("AF-AN"), boundary("NA-PA")]))
}
