//! Domain-specific error types for quakemap
//!
//! # Error Categories
//!
//! - **FeatureError**: input-shape problems in a single GeoJSON feature
//! - **FeedError**: fetching or decoding one of the remote feeds
//! - **LayerError**: toggling or selecting a layer that does not exist
//! - **ExportError**: template rendering and output writing
//!
//! Feature and feed errors never abort a session: a malformed feature is
//! skipped and a failed feed leaves its overlay empty.
//!
//! # Examples
//!
//! ```rust
//! use quakemap::errors::FeatureError;
//!
//! let err = FeatureError::MissingField {
//!     index: 3,
//!     field: "properties.mag",
//! };
//! assert_eq!(err.to_string(), "Feature 3: missing field 'properties.mag'");
//! ```

pub mod export;
pub mod feature;
pub mod feed;
pub mod layer;

pub use export::ExportError;
pub use feature::FeatureError;
pub use feed::FeedError;
pub use layer::LayerError;

/// Result type alias for feature parsing
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Result type alias for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Result type alias for layer operations
pub type LayerResult<T> = Result<T, LayerError>;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
