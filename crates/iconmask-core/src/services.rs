//! Host capabilities the mask engine consumes.
//!
//! Everything that touches the host application (selection, libraries,
//! vector conversion) comes in through these traits. Hosts implement them
//! once; tests implement them in memory.

// The engine drives these futures on the host's own executor; they are
// never sent across threads, so no `Send` bound is required.
#![allow(async_fn_in_trait)]

use iconmask_model::{ArtboardId, Document, Layer, Library, LibraryId, SymbolId, SymbolMaster};

use crate::Result;

/// Access to external color libraries.
pub trait LibraryService {
    /// Resolve a library handle from its id.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::LibraryUnavailable`](crate::MaskError::LibraryUnavailable)
    /// when no such library is installed.
    fn resolve_library_by_id(&self, id: &LibraryId) -> Result<Library>;

    /// Load the library's contents. Must be safe to call repeatedly.
    async fn load(&self, library: &Library) -> Result<()>;

    /// Copy a library symbol master into `document` and return the local copy.
    async fn import_symbol_into(
        &self,
        symbol: &SymbolMaster,
        library: &Library,
        document: &mut Document,
    ) -> Result<SymbolMaster>;

    fn lookup_symbol_in_library(
        &self,
        library: &Library,
        symbol: &SymbolId,
    ) -> Option<SymbolMaster>;

    fn lookup_symbol_in_document(
        &self,
        document: &Document,
        symbol: &SymbolId,
    ) -> Option<SymbolMaster> {
        document.symbol(symbol).cloned()
    }
}

/// Converts arbitrary icon artwork into a single flat shape that can carry a
/// clipping mask.
pub trait VectorFlattener {
    /// # Errors
    ///
    /// Any failure is fatal for the artboard being processed; implementations
    /// should report it as [`MaskError::Flatten`](crate::MaskError::Flatten).
    async fn flatten_to_maskable(&self, layer: &Layer) -> Result<Layer>;
}

/// The host's current artboard selection.
pub trait SelectionSource {
    fn selected_artboards(&self) -> Vec<ArtboardId>;

    fn clear_selection(&mut self);
}
