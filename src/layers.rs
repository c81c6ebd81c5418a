//! Map composition: base layers, overlay groups, the layer control and the
//! legend, owned by one session object.

use crate::config::{MapConfig, TileLayerConfig};
use crate::errors::{FeatureError, LayerError, LayerResult};
use crate::feature::{BoundaryFeature, EarthquakeFeature};
use crate::legend::Legend;
use crate::marker::{create_marker, CircleMarker, LatLng};
use crate::style::{BoundaryStyle, BOUNDARY_STYLE};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub type TileLayer = TileLayerConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryShape {
    pub geometry: Value,
    pub style: BoundaryStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Renderable {
    Marker(CircleMarker),
    Boundary(BoundaryShape),
}

/// Named overlay. Members are appended as features arrive and never removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerGroup {
    pub name: String,
    pub visible: bool,
    members: Vec<Renderable>,
}

impl LayerGroup {
    pub fn new(name: impl Into<String>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible,
            members: Vec::new(),
        }
    }

    pub fn add(&mut self, member: Renderable) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[Renderable] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds a marker for every well-formed earthquake feature.
    pub fn add_earthquakes(&mut self, features: &[Value]) -> FeatureReport {
        let mut report = FeatureReport::default();
        for (index, value) in features.iter().enumerate() {
            match EarthquakeFeature::from_geojson(index, value) {
                Ok(feature) => {
                    let position = LatLng::from(&feature);
                    self.add(Renderable::Marker(create_marker(&feature, position)));
                    report.rendered += 1;
                }
                Err(err) => {
                    warn!("Skipping earthquake feature: {}", err);
                    report.skipped.push(err);
                }
            }
        }
        debug!(
            "Layer '{}': {} markers added, {} features skipped",
            self.name,
            report.rendered,
            report.skipped.len()
        );
        report
    }

    /// Adds a constant-style shape for every boundary feature.
    pub fn add_boundaries(&mut self, features: &[Value]) -> FeatureReport {
        let mut report = FeatureReport::default();
        for (index, value) in features.iter().enumerate() {
            match BoundaryFeature::from_geojson(index, value) {
                Ok(feature) => {
                    self.add(Renderable::Boundary(BoundaryShape {
                        geometry: feature.geometry,
                        style: BOUNDARY_STYLE,
                    }));
                    report.rendered += 1;
                }
                Err(err) => {
                    warn!("Skipping boundary feature: {}", err);
                    report.skipped.push(err);
                }
            }
        }
        debug!(
            "Layer '{}': {} boundaries added, {} features skipped",
            self.name,
            report.rendered,
            report.skipped.len()
        );
        report
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureReport {
    pub rendered: usize,
    pub skipped: Vec<FeatureError>,
}

/// Layer switcher shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
    pub collapsed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapComposition {
    pub title: String,
    pub view: MapView,
    pub base_layers: IndexMap<String, TileLayer>,
    pub active_base_layer: String,
    pub earthquakes: LayerGroup,
    pub tectonic_plates: LayerGroup,
    pub control: LayerControl,
    pub legend: Legend,
}

impl MapComposition {
    /// Builds the map, base layers, empty overlays, control and legend.
    /// Nothing here depends on feed data.
    pub fn new(config: &MapConfig) -> Self {
        let base_layers: IndexMap<String, TileLayer> = config
            .base_layers
            .iter()
            .map(|layer| (layer.name.clone(), layer.clone()))
            .collect();

        let active_base_layer = if base_layers.contains_key(&config.default_base_layer) {
            config.default_base_layer.clone()
        } else {
            let fallback = base_layers.keys().next().cloned().unwrap_or_default();
            warn!(
                "Default base layer '{}' not configured, using '{}'",
                config.default_base_layer, fallback
            );
            fallback
        };

        let earthquakes = LayerGroup::new(
            config.overlays.earthquakes.name.clone(),
            config.overlays.earthquakes.visible,
        );
        let tectonic_plates = LayerGroup::new(
            config.overlays.tectonic_plates.name.clone(),
            config.overlays.tectonic_plates.visible,
        );

        let control = LayerControl {
            base_layers: base_layers.keys().cloned().collect(),
            overlays: vec![earthquakes.name.clone(), tectonic_plates.name.clone()],
            collapsed: false,
        };

        Self {
            title: config.title().to_string(),
            view: MapView {
                center: LatLng::new(config.view.center[0], config.view.center[1]),
                zoom: config.view.zoom,
            },
            base_layers,
            active_base_layer,
            earthquakes,
            tectonic_plates,
            control,
            legend: Legend::new(config.legend.position),
        }
    }

    pub fn overlays(&self) -> [&LayerGroup; 2] {
        [&self.earthquakes, &self.tectonic_plates]
    }

    pub fn overlay(&self, name: &str) -> LayerResult<&LayerGroup> {
        self.overlays()
            .into_iter()
            .find(|group| group.name == name)
            .ok_or_else(|| LayerError::UnknownOverlay(name.to_string()))
    }

    /// Overlays toggle independently of each other.
    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> LayerResult<()> {
        let group = if self.earthquakes.name == name {
            &mut self.earthquakes
        } else if self.tectonic_plates.name == name {
            &mut self.tectonic_plates
        } else {
            return Err(LayerError::UnknownOverlay(name.to_string()));
        };
        group.visible = visible;
        Ok(())
    }

    /// Exactly one base layer is active at a time.
    pub fn select_base_layer(&mut self, name: &str) -> LayerResult<()> {
        if !self.base_layers.contains_key(name) {
            return Err(LayerError::UnknownBaseLayer(name.to_string()));
        }
        self.active_base_layer = name.to_string();
        Ok(())
    }

    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.base_layers.get(&self.active_base_layer)
    }
}
