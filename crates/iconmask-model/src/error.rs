#![deny(unsafe_code)]

use crate::layer::LayerPath;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid color string: {value}")]
    InvalidColor { value: String },

    #[error("invalid artboard id: {0:?}")]
    InvalidArtboardId(String),

    #[error("invalid library id: {0:?}")]
    InvalidLibraryId(String),

    #[error("invalid symbol id: {0:?}")]
    InvalidSymbolId(String),

    #[error("artboard {artboard} has no layer at {path}")]
    MissingLayer { artboard: String, path: LayerPath },

    #[error("artboard {artboard} has no icon layer")]
    EmptyArtboard { artboard: String },

    #[error("failed to parse mask options: {source}")]
    Options {
        #[source]
        source: toml::de::Error,
    },
}

impl ModelError {
    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
