//! Color libraries and the symbol masters they publish.

use serde::{Deserialize, Serialize};

use crate::{Color, Layer, LayerKind, LibraryId, Size, SymbolId};

/// Handle to an external library, as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: LibraryId,
    pub name: String,
}

impl Library {
    pub fn new(id: LibraryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A reusable color swatch.
///
/// `color` is the primary fill of the master's artwork; it is what a
/// stroke-based icon gets tinted with when the master is picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMaster {
    pub id: SymbolId,
    pub name: String,
    pub size: Size,
    #[serde(default)]
    pub color: Option<Color>,
    /// Library the master was imported from, `None` for local masters.
    #[serde(default)]
    pub library: Option<LibraryId>,
}

impl SymbolMaster {
    pub fn new(id: SymbolId, name: impl Into<String>, size: Size) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            color: None,
            library: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn imported_from(mut self, library: LibraryId) -> Self {
        self.library = Some(library);
        self
    }

    pub fn new_instance(&self) -> Layer {
        Layer::new(
            self.name.clone(),
            LayerKind::SymbolInstance {
                symbol: self.id.clone(),
                library: self.library.clone(),
            },
            self.size,
        )
    }
}
