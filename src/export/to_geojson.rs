//! Styled GeoJSON export: every rendered marker and boundary as a Feature
//! with its precomputed style, so other viewers can reuse the encoding.

use crate::errors::ExportResult;
use crate::layers::{LayerGroup, MapComposition, Renderable};
use serde_json::{json, Value};

fn to_features(group: &LayerGroup) -> Vec<Value> {
    group
        .members()
        .iter()
        .map(|member| match member {
            Renderable::Marker(marker) => json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [marker.position.lng, marker.position.lat],
                },
                "properties": {
                    "layer": group.name,
                    "style": marker.style,
                    "popup": marker.popup,
                },
            }),
            Renderable::Boundary(shape) => json!({
                "type": "Feature",
                "geometry": shape.geometry,
                "properties": {
                    "layer": group.name,
                    "style": shape.style,
                },
            }),
        })
        .collect()
}

pub fn render(composition: &MapComposition) -> ExportResult<String> {
    let features: Vec<Value> = composition
        .overlays()
        .into_iter()
        .flat_map(to_features)
        .collect();

    let res = serde_json::to_string_pretty(&json!({
        "type": "FeatureCollection",
        "features": features,
        "legend": composition.legend.entries,
    }))?;
    Ok(res)
}
