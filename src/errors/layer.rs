use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    #[error("Unknown overlay: {0}")]
    UnknownOverlay(String),

    #[error("Unknown base layer: {0}")]
    UnknownBaseLayer(String),
}
