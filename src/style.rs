//! Per-feature marker styling and the constant boundary style.

use crate::encoding::{color_for, radius_for, MarkerColor};
use crate::feature::EarthquakeFeature;
use serde::{Deserialize, Serialize};

pub const MARKER_STROKE_COLOR: &str = "#000000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;

/// Path options for a circle marker, serialised with the option names the
/// browser-side map library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub fill_color: MarkerColor,
    pub color: String,
    pub radius: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub stroke: bool,
    pub weight: f64,
}

pub fn style_for(feature: &EarthquakeFeature) -> StyleDescriptor {
    StyleDescriptor {
        fill_color: color_for(feature.depth),
        color: MARKER_STROKE_COLOR.to_string(),
        radius: radius_for(feature.magnitude),
        opacity: 1.0,
        fill_opacity: 1.0,
        stroke: true,
        weight: MARKER_STROKE_WEIGHT,
    }
}

/// Line style shared by every plate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryStyle {
    pub color: &'static str,
    pub weight: f64,
}

pub const BOUNDARY_STYLE: BoundaryStyle = BoundaryStyle {
    color: "blue",
    weight: 2.0,
};
