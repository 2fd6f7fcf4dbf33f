use iconmask_model::{ArtboardId, LibraryId, ModelError, SymbolId};

/// Failures of one artboard's mask operation.
///
/// Errors never span artboards: the orchestrator records them per artboard
/// and moves on.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    #[error("no color source could be resolved")]
    MissingColorSource,

    #[error("library {library} is unavailable: {reason}")]
    LibraryUnavailable { library: LibraryId, reason: String },

    #[error("symbol {symbol} not found")]
    SymbolNotFound {
        symbol: SymbolId,
        library: Option<LibraryId>,
    },

    #[error("failed to flatten icon artwork: {0}")]
    Flatten(String),

    #[error("artboard {artboard} not found in document")]
    ArtboardNotFound { artboard: ArtboardId },

    #[error("artboard {artboard} is malformed: {message}")]
    StructuralMismatch {
        artboard: ArtboardId,
        message: String,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl MaskError {
    pub(crate) fn structural(artboard: &ArtboardId, message: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            artboard: artboard.clone(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MaskError>;
