//! Error types used by the crate.

use mapdeck_types::error::MapDeckTypesError;
use thiserror::Error;

/// Mapdeck error type.
#[derive(Debug, Error)]
pub enum MapDeckError {
    /// A chart or layer specification cannot be parsed.
    #[error("{0}")]
    MalformedSpecification(String),
    /// Layer `type` is not one of the supported layer kinds.
    #[error("Unsupported layer type \"{0}\"")]
    UnsupportedLayerType(String),
    /// Layer data cannot be converted into rows.
    #[error("invalid layer data: {0}")]
    Data(#[from] MapDeckTypesError),
    /// The renderer failed to draw the frame.
    #[error("{0}")]
    Render(String),
}

impl MapDeckError {
    /// Short name of the error kind, shown next to the message in an error notice.
    pub fn kind(&self) -> &'static str {
        match self {
            MapDeckError::MalformedSpecification(_) => "MalformedSpecification",
            MapDeckError::UnsupportedLayerType(_) => "UnsupportedLayerType",
            MapDeckError::Data(_) => "InvalidData",
            MapDeckError::Render(_) => "RenderError",
        }
    }
}

impl From<serde_json::Error> for MapDeckError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedSpecification(value.to_string())
    }
}
