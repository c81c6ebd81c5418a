//! Turns one earthquake into a circle marker with a popup.

use crate::common::format_number;
use crate::feature::EarthquakeFeature;
use crate::style::{style_for, StyleDescriptor};
use serde::Serialize;

pub const UNKNOWN_PLACE: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<&EarthquakeFeature> for LatLng {
    fn from(feature: &EarthquakeFeature) -> Self {
        Self::new(feature.latitude, feature.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub position: LatLng,
    pub style: StyleDescriptor,
    /// HTML shown when the marker is clicked
    pub popup: String,
}

pub fn create_marker(feature: &EarthquakeFeature, position: LatLng) -> CircleMarker {
    CircleMarker {
        position,
        style: style_for(feature),
        popup: popup_text(feature),
    }
}

/// `Magnitude: {mag}<br>Location: {place}<br>Depth: {depth} km`
///
/// Numbers are printed unrounded. The place comes from the feed and is
/// escaped since the popup body is HTML.
pub fn popup_text(feature: &EarthquakeFeature) -> String {
    let place = feature
        .place
        .as_deref()
        .map(handlebars::html_escape)
        .unwrap_or_else(|| UNKNOWN_PLACE.to_string());
    format!(
        "Magnitude: {}<br>Location: {}<br>Depth: {} km",
        format_number(feature.magnitude),
        place,
        format_number(feature.depth)
    )
}
