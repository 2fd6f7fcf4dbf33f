pub mod artboard;
pub mod color;
pub mod command;
pub mod error;
pub mod ids;
pub mod layer;
pub mod library;
pub mod metadata;
pub mod options;
pub mod style;

pub use artboard::{Artboard, Document};
pub use color::Color;
pub use command::ArtboardCommand;
pub use error::{ModelError, Result};
pub use ids::{ArtboardId, LibraryId, SymbolId};
pub use layer::{ClippingMaskMode, Layer, LayerKind, LayerPath, Size};
pub use library::{Library, SymbolMaster};
pub use metadata::{ColorReference, MaskMetadata, MetadataBackend, MetadataKey};
pub use options::{DEFAULT_MASK_LAYER_NAME, LegacyMigrationMode, MaskOptions};
pub use style::{Border, Fill, Style};
