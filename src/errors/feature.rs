//! Input-shape errors for individual GeoJSON features

use thiserror::Error;

/// A feature that cannot be turned into a renderable object.
///
/// `index` is the position of the feature inside its FeatureCollection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("Feature {index}: not a JSON object")]
    NotAnObject { index: usize },

    #[error("Feature {index}: missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Feature {index}: field '{field}' is not a number")]
    NotANumber { index: usize, field: &'static str },

    #[error("Feature {index}: expected at least {expected} coordinates, found {found}")]
    ShortCoordinates {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl FeatureError {
    pub fn index(&self) -> usize {
        match self {
            FeatureError::NotAnObject { index }
            | FeatureError::MissingField { index, .. }
            | FeatureError::NotANumber { index, .. }
            | FeatureError::ShortCoordinates { index, .. } => *index,
        }
    }
}
