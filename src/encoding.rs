//! Visual encoding of earthquake attributes.
//!
//! Depth drives the marker fill color through [`DEPTH_BANDS`]; magnitude
//! drives the marker radius. Both functions are total: any `f64`, including
//! negative values, infinities and NaN, yields a value without failing.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Multiplier applied to magnitude to obtain a marker radius.
pub const RADIUS_SCALE: f64 = 2.5;

/// Radius used for zero-magnitude events so they stay visible.
pub const MIN_RADIUS: f64 = 1.0;

/// Fill colors used for depth bands, shallowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Cyan,
    LightGreen,
    LimeGreen,
    Yellow,
    Orange,
    Red,
}

impl MarkerColor {
    /// CSS color name understood by the browser.
    pub fn as_css(&self) -> &'static str {
        match self {
            MarkerColor::Cyan => "cyan",
            MarkerColor::LightGreen => "lightgreen",
            MarkerColor::LimeGreen => "limegreen",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Orange => "orange",
            MarkerColor::Red => "red",
        }
    }
}

impl Display for MarkerColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// One row of the depth color table: depths strictly greater than `lower`
/// (and not greater than the next row's `lower`) get `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    pub lower: f64,
    pub color: MarkerColor,
}

/// Depth bands in ascending order. The first row is unbounded below, the
/// last unbounded above.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand {
        lower: f64::NEG_INFINITY,
        color: MarkerColor::Cyan,
    },
    DepthBand {
        lower: 10.0,
        color: MarkerColor::LightGreen,
    },
    DepthBand {
        lower: 30.0,
        color: MarkerColor::LimeGreen,
    },
    DepthBand {
        lower: 50.0,
        color: MarkerColor::Yellow,
    },
    DepthBand {
        lower: 70.0,
        color: MarkerColor::Orange,
    },
    DepthBand {
        lower: 90.0,
        color: MarkerColor::Red,
    },
];

/// Index into [`DEPTH_BANDS`] of the band containing `depth`.
///
/// Bands are checked deepest first with a strict `>`; anything that matches
/// none of them (depth ≤ 10, −∞, NaN) lands in the shallowest band.
pub fn band_index(depth: f64) -> usize {
    DEPTH_BANDS
        .iter()
        .rposition(|band| depth > band.lower)
        .unwrap_or(0)
}

pub fn color_for(depth: f64) -> MarkerColor {
    DEPTH_BANDS[band_index(depth)].color
}

/// Marker radius for a magnitude.
///
/// Exactly zero maps to [`MIN_RADIUS`]. Every other value, negative ones
/// included, is scaled by [`RADIUS_SCALE`], so a negative magnitude gives a
/// negative radius which the browser draws as nothing.
pub fn radius_for(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        MIN_RADIUS
    } else {
        magnitude * RADIUS_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_strictly_increasing() {
        for pair in DEPTH_BANDS.windows(2) {
            assert!(pair[0].lower < pair[1].lower);
        }
    }

    #[test]
    fn test_color_boundaries_are_exclusive_below() {
        assert_eq!(color_for(91.0), MarkerColor::Red);
        assert_eq!(color_for(90.0), MarkerColor::Orange);
        assert_eq!(color_for(70.5), MarkerColor::Orange);
        assert_eq!(color_for(70.0), MarkerColor::Yellow);
        assert_eq!(color_for(50.0), MarkerColor::LimeGreen);
        assert_eq!(color_for(30.0), MarkerColor::LightGreen);
        assert_eq!(color_for(12.0), MarkerColor::LightGreen);
        assert_eq!(color_for(10.0), MarkerColor::Cyan);
    }

    #[test]
    fn test_shallow_and_negative_depths_share_lowest_band() {
        assert_eq!(color_for(10.0), color_for(-5.0));
        assert_eq!(color_for(0.0), MarkerColor::Cyan);
        assert_eq!(color_for(f64::NEG_INFINITY), MarkerColor::Cyan);
        assert_eq!(color_for(f64::NAN), MarkerColor::Cyan);
    }

    #[test]
    fn test_extreme_depths() {
        assert_eq!(color_for(700.0), MarkerColor::Red);
        assert_eq!(color_for(f64::INFINITY), MarkerColor::Red);
    }

    #[test]
    fn test_color_warmth_never_increases_with_shallower_depth() {
        let mut previous = band_index(200.0);
        let mut depth = 200.0;
        while depth > -20.0 {
            let current = band_index(depth);
            assert!(current <= previous, "band rose at depth {}", depth);
            previous = current;
            depth -= 0.25;
        }
    }

    #[test]
    fn test_radius_scaling() {
        assert_eq!(radius_for(0.0), 1.0);
        assert_eq!(radius_for(5.0), 12.5);
        assert_eq!(radius_for(1.2), 1.2 * 2.5);
        assert_eq!(radius_for(-0.5), -1.25);
    }

    #[test]
    fn test_negative_zero_is_zero_magnitude() {
        assert_eq!(radius_for(-0.0), 1.0);
    }

    #[test]
    fn test_css_names() {
        let names: Vec<&str> = DEPTH_BANDS.iter().map(|b| b.color.as_css()).collect();
        assert_eq!(
            names,
            vec!["cyan", "lightgreen", "limegreen", "yellow", "orange", "red"]
        );
    }

    #[test]
    fn test_color_serializes_as_css_name() {
        let json = serde_json::to_string(&MarkerColor::LimeGreen).unwrap();
        assert_eq!(json, "\"limegreen\"");
    }
}
