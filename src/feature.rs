//! Typed views over GeoJSON features from the two feeds.

use crate::errors::{FeatureError, FeatureResult, FeedError, FeedResult};
use serde_json::Value;

/// One earthquake event.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub magnitude: f64,
    pub place: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    /// Kilometres below the surface; negative above sea level.
    pub depth: f64,
}

impl EarthquakeFeature {
    /// Reads `properties.mag`, `properties.place` and
    /// `geometry.coordinates = [lon, lat, depth]`.
    pub fn from_geojson(index: usize, feature: &Value) -> FeatureResult<Self> {
        let object = feature
            .as_object()
            .ok_or(FeatureError::NotAnObject { index })?;

        let magnitude = object
            .get("properties")
            .and_then(|p| p.get("mag"))
            .filter(|v| !v.is_null())
            .ok_or(FeatureError::MissingField {
                index,
                field: "properties.mag",
            })?
            .as_f64()
            .ok_or(FeatureError::NotANumber {
                index,
                field: "properties.mag",
            })?;

        let place = object
            .get("properties")
            .and_then(|p| p.get("place"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let coordinates = object
            .get("geometry")
            .and_then(|g| g.get("coordinates"))
            .and_then(Value::as_array)
            .ok_or(FeatureError::MissingField {
                index,
                field: "geometry.coordinates",
            })?;

        if coordinates.len() < 3 {
            return Err(FeatureError::ShortCoordinates {
                index,
                expected: 3,
                found: coordinates.len(),
            });
        }

        let coordinate = |position: usize, field: &'static str| {
            coordinates[position]
                .as_f64()
                .ok_or(FeatureError::NotANumber { index, field })
        };

        Ok(Self {
            magnitude,
            place,
            longitude: coordinate(0, "geometry.coordinates[0]")?,
            latitude: coordinate(1, "geometry.coordinates[1]")?,
            depth: coordinate(2, "geometry.coordinates[2]")?,
        })
    }
}

/// One plate boundary. Only the geometry is kept; properties are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub geometry: Value,
}

impl BoundaryFeature {
    pub fn from_geojson(index: usize, feature: &Value) -> FeatureResult<Self> {
        let object = feature
            .as_object()
            .ok_or(FeatureError::NotAnObject { index })?;
        let geometry = object
            .get("geometry")
            .filter(|g| g.get("type").and_then(Value::as_str).is_some())
            .ok_or(FeatureError::MissingField {
                index,
                field: "geometry",
            })?;
        Ok(Self {
            geometry: geometry.clone(),
        })
    }
}

/// Extracts the `features` array of a GeoJSON FeatureCollection.
pub fn collection_features(collection: Value) -> FeedResult<Vec<Value>> {
    let Value::Object(mut object) = collection else {
        return Err(FeedError::NotAFeatureCollection(
            "top-level value is not an object".to_string(),
        ));
    };

    match object.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {}
        Some(other) => {
            return Err(FeedError::NotAFeatureCollection(format!(
                "type is '{}'",
                other
            )))
        }
        None => {
            return Err(FeedError::NotAFeatureCollection(
                "missing 'type'".to_string(),
            ))
        }
    }

    match object.remove("features") {
        Some(Value::Array(features)) => Ok(features),
        _ => Err(FeedError::NotAFeatureCollection(
            "missing 'features' array".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quake(mag: Value, coordinates: Value) -> Value {
        json!({
            "type": "Feature",
            "properties": { "mag": mag, "place": "10km SSW of Idyllwild, CA" },
            "geometry": { "type": "Point", "coordinates": coordinates }
        })
    }

    #[test]
    fn test_parses_well_formed_earthquake() {
        let feature =
            EarthquakeFeature::from_geojson(0, &quake(json!(5.0), json!([-118.2, 34.0, 12])))
                .unwrap();
        assert_eq!(feature.magnitude, 5.0);
        assert_eq!(feature.longitude, -118.2);
        assert_eq!(feature.latitude, 34.0);
        assert_eq!(feature.depth, 12.0);
        assert_eq!(feature.place.as_deref(), Some("10km SSW of Idyllwild, CA"));
    }

    #[test]
    fn test_missing_magnitude_is_rejected() {
        let err = EarthquakeFeature::from_geojson(4, &quake(Value::Null, json!([1, 2, 3])))
            .unwrap_err();
        assert_eq!(
            err,
            FeatureError::MissingField {
                index: 4,
                field: "properties.mag"
            }
        );
    }

    #[test]
    fn test_non_numeric_magnitude_is_rejected() {
        let err = EarthquakeFeature::from_geojson(0, &quake(json!("big"), json!([1, 2, 3])))
            .unwrap_err();
        assert!(matches!(err, FeatureError::NotANumber { .. }));
    }

    #[test]
    fn test_two_coordinates_are_rejected() {
        let err =
            EarthquakeFeature::from_geojson(2, &quake(json!(1.0), json!([1, 2]))).unwrap_err();
        assert_eq!(
            err,
            FeatureError::ShortCoordinates {
                index: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_missing_place_is_allowed() {
        let value = json!({
            "type": "Feature",
            "properties": { "mag": 2.1 },
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0, -1.5] }
        });
        let feature = EarthquakeFeature::from_geojson(0, &value).unwrap();
        assert_eq!(feature.place, None);
        assert_eq!(feature.depth, -1.5);
    }

    #[test]
    fn test_boundary_keeps_geometry_only() {
        let value = json!({
            "type": "Feature",
            "properties": { "Name": "AF-AN" },
            "geometry": { "type": "LineString", "coordinates": [[-0.4, -54.8], [0.0, -54.6]] }
        });
        let boundary = BoundaryFeature::from_geojson(0, &value).unwrap();
        assert_eq!(boundary.geometry["type"], "LineString");
    }

    #[test]
    fn test_boundary_without_geometry_is_rejected() {
        let err = BoundaryFeature::from_geojson(1, &json!({"type": "Feature"})).unwrap_err();
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn test_collection_features() {
        let features = collection_features(json!({
            "type": "FeatureCollection",
            "features": [{ "type": "Feature" }, { "type": "Feature" }]
        }))
        .unwrap();
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_collection_rejects_other_types() {
        let err = collection_features(json!({ "type": "Feature" })).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_FEATURE_COLLECTION");
        assert!(collection_features(json!([1, 2])).is_err());
    }
}
