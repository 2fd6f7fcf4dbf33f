//! Color requests and their resolution into concrete colors and mask layers.

use std::collections::HashSet;

use iconmask_model::{
    Color, ColorReference, Document, Layer, Library, LibraryId, Size, Style, SymbolId,
    SymbolMaster,
};
use tracing::debug;

use crate::services::LibraryService;
use crate::{MaskError, Result};

/// A symbol given either as a resolved master or by id only.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolRef {
    Master(SymbolMaster),
    Id(SymbolId),
}

impl SymbolRef {
    pub fn id(&self) -> &SymbolId {
        match self {
            SymbolRef::Master(master) => &master.id,
            SymbolRef::Id(id) => id,
        }
    }
}

/// The color a caller wants applied to an artboard.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRequest {
    /// A literal color from the color picker.
    Picker(Color),
    /// A color symbol, from an external library or (without a library) from
    /// the local document.
    Symbol {
        library: Option<Library>,
        symbol: SymbolRef,
    },
}

impl ColorRequest {
    pub fn picker(color: Color) -> Self {
        Self::Picker(color)
    }

    pub fn library_symbol(library: Library, master: SymbolMaster) -> Self {
        Self::Symbol {
            library: Some(library),
            symbol: SymbolRef::Master(master),
        }
    }

    pub fn local_symbol(symbol: SymbolId) -> Self {
        Self::Symbol {
            library: None,
            symbol: SymbolRef::Id(symbol),
        }
    }

    /// Builds a request from loosely typed host parameters. A picker value
    /// wins over a symbol when both are given.
    ///
    /// # Errors
    ///
    /// [`MaskError::MissingColorSource`] when neither is present.
    pub fn from_parts(
        library: Option<Library>,
        symbol: Option<SymbolRef>,
        picker: Option<Color>,
    ) -> Result<Self> {
        match (picker, symbol) {
            (Some(color), _) => Ok(Self::Picker(color)),
            (None, Some(symbol)) => Ok(Self::Symbol { library, symbol }),
            (None, None) => Err(MaskError::MissingColorSource),
        }
    }

    /// The reference that gets persisted for this request.
    pub fn reference(&self) -> ColorReference {
        match self {
            ColorRequest::Picker(color) => ColorReference::Picker(*color),
            ColorRequest::Symbol { library, symbol } => ColorReference::LibrarySymbol {
                library: library.as_ref().map(|library| library.id.clone()),
                symbol: symbol.id().clone(),
            },
        }
    }
}

/// Libraries already loaded during the current batch.
#[derive(Debug, Default)]
pub struct LibraryLoads {
    cache: bool,
    loaded: HashSet<LibraryId>,
}

impl LibraryLoads {
    pub fn new(cache: bool) -> Self {
        Self {
            cache,
            loaded: HashSet::new(),
        }
    }

    pub async fn ensure_loaded<L: LibraryService>(
        &mut self,
        libraries: &L,
        library: &Library,
    ) -> Result<()> {
        if self.cache && self.loaded.contains(&library.id) {
            debug!(library = %library.id, "library already loaded");
            return Ok(());
        }
        libraries.load(library).await?;
        self.loaded.insert(library.id.clone());
        Ok(())
    }
}

/// Resolves requests against the library service and the current document.
pub struct ColorResolver<'a, L> {
    libraries: &'a L,
    loads: &'a mut LibraryLoads,
}

impl<'a, L: LibraryService> ColorResolver<'a, L> {
    pub fn new(libraries: &'a L, loads: &'a mut LibraryLoads) -> Self {
        Self { libraries, loads }
    }

    /// Load `id` and return its handle.
    pub async fn load_library(&mut self, id: &LibraryId) -> Result<Library> {
        let library = self.libraries.resolve_library_by_id(id)?;
        self.loads.ensure_loaded(self.libraries, &library).await?;
        Ok(library)
    }

    /// Loads `library` (once per batch when caching) before its symbol is
    /// used, even when the master is already resolved.
    pub async fn resolve_master(
        &mut self,
        library: Option<&Library>,
        symbol: &SymbolRef,
        document: &Document,
    ) -> Result<SymbolMaster> {
        if let Some(library) = library {
            self.loads.ensure_loaded(self.libraries, library).await?;
        }
        let id = match symbol {
            SymbolRef::Master(master) => return Ok(master.clone()),
            SymbolRef::Id(id) => id,
        };
        let found = match library {
            Some(library) => self.libraries.lookup_symbol_in_library(library, id),
            None => self.libraries.lookup_symbol_in_document(document, id),
        };
        found.ok_or_else(|| MaskError::SymbolNotFound {
            symbol: id.clone(),
            library: library.map(|library| library.id.clone()),
        })
    }

    /// The literal color used to tint strokes.
    pub async fn stroke_color(
        &mut self,
        request: &ColorRequest,
        document: &Document,
    ) -> Result<Color> {
        match request {
            ColorRequest::Picker(color) => Ok(*color),
            ColorRequest::Symbol { library, symbol } => {
                let master = self
                    .resolve_master(library.as_ref(), symbol, document)
                    .await?;
                master.color.ok_or(MaskError::MissingColorSource)
            }
        }
    }

    /// Builds the overlay layer for `request`, sized to `target`.
    ///
    /// Library symbols are imported into `document` first, so the instance
    /// points at a local master.
    pub async fn mask_layer(
        &mut self,
        request: &ColorRequest,
        target: Size,
        document: &mut Document,
    ) -> Result<Layer> {
        let mut layer = match request {
            ColorRequest::Picker(color) => {
                Layer::shape("mask", target).with_style(Style::default().with_fill(*color))
            }
            ColorRequest::Symbol { library, symbol } => {
                let master = self
                    .resolve_master(library.as_ref(), symbol, document)
                    .await?;
                let local = match library {
                    Some(library) => {
                        self.libraries
                            .import_symbol_into(&master, library, document)
                            .await?
                    }
                    None => master,
                };
                local.new_instance()
            }
        };
        fit_to(&mut layer, target);
        Ok(layer)
    }
}

/// Scales `layer` to cover `target`: proportionally by height, then by
/// width, then the height is pinned so non-square masks still cover the
/// whole artboard.
fn fit_to(layer: &mut Layer, target: Size) {
    layer.set_height_respecting_proportions(target.height);
    layer.set_width_respecting_proportions(target.width);
    layer.size.height = target.height;
}
