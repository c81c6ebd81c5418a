//! ## Structure
//! This module contains the data structures for the map configuration file.
//!
//! ```text
//! MapConfig
//!   ├── meta: Option<Meta>
//!   │   └── title: Option<String>
//!   ├── view: ViewConfig
//!   │   ├── center: [lat, lng]
//!   │   └── zoom: u8
//!   ├── feeds: FeedEndpoints
//!   │   ├── earthquakes: String
//!   │   ├── tectonic_plates: String
//!   │   └── timeout_secs: u64
//!   ├── base_layers: Vec<TileLayerConfig>
//!   │   ├── name: String
//!   │   ├── url: String
//!   │   └── attribution: String
//!   ├── default_base_layer: String
//!   ├── overlays: OverlayConfig
//!   │   ├── earthquakes: OverlaySettings
//!   │   └── tectonic_plates: OverlaySettings
//!   ├── legend: LegendConfig
//!   │   └── position: LegendPosition
//!   └── export: ExportProfile
//!       └── profiles: Vec<ExportProfileItem>
//!           ├── filename: String
//!           └── exporter: ExportFileType
//!               ├── Html
//!               └── GeoJson
//! ```

use crate::legend::LegendPosition;
use serde::{Deserialize, Serialize};

pub const USGS_WEEKLY_FEED: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const PLATE_BOUNDARIES_FEED: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Meta {
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub meta: Option<Meta>,
    pub view: ViewConfig,
    pub feeds: FeedEndpoints,
    pub base_layers: Vec<TileLayerConfig>,
    pub default_base_layer: String,
    pub overlays: OverlayConfig,
    pub legend: LegendConfig,
    pub export: ExportProfile,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            meta: Some(Meta {
                title: Some("Earthquakes and Tectonic Plates".to_string()),
            }),
            view: ViewConfig::default(),
            feeds: FeedEndpoints::default(),
            base_layers: vec![
                TileLayerConfig {
                    name: "Street Map".to_string(),
                    url: OSM_TILES.to_string(),
                    attribution: OSM_ATTRIBUTION.to_string(),
                },
                TileLayerConfig {
                    name: "Default Map".to_string(),
                    url: OSM_TILES.to_string(),
                    attribution: OSM_ATTRIBUTION.to_string(),
                },
            ],
            default_base_layer: "Default Map".to_string(),
            overlays: OverlayConfig::default(),
            legend: LegendConfig::default(),
            export: ExportProfile::default(),
        }
    }
}

impl MapConfig {
    pub fn title(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .unwrap_or("Earthquakes")
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: [34.03, -118.15],
            zoom: 5,
        }
    }
}

/// Locations of the two feeds: `http(s)://` URLs or local file paths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FeedEndpoints {
    pub earthquakes: String,
    pub tectonic_plates: String,
    pub timeout_secs: u64,
}

impl Default for FeedEndpoints {
    fn default() -> Self {
        Self {
            earthquakes: USGS_WEEKLY_FEED.to_string(),
            tectonic_plates: PLATE_BOUNDARIES_FEED.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TileLayerConfig {
    pub name: String,
    pub url: String,
    pub attribution: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    pub earthquakes: OverlaySettings,
    pub tectonic_plates: OverlaySettings,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            earthquakes: OverlaySettings {
                name: "Earthquakes".to_string(),
                visible: true,
            },
            tectonic_plates: OverlaySettings {
                name: "Tectonic Plates".to_string(),
                visible: true,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub name: String,
    pub visible: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct LegendConfig {
    #[serde(default)]
    pub position: LegendPosition,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportProfile {
    pub profiles: Vec<ExportProfileItem>,
}

impl Default for ExportProfile {
    fn default() -> Self {
        Self {
            profiles: vec![ExportProfileItem {
                filename: "quakemap.html".to_string(),
                exporter: ExportFileType::Html,
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportProfileItem {
    pub filename: String,
    pub exporter: ExportFileType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFileType {
    Html,
    GeoJson,
}
