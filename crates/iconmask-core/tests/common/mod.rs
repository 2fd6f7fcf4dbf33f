//! In-memory host services shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};

use iconmask_core::{LibraryService, MaskError, Result, SelectionSource, VectorFlattener};
use iconmask_model::{
    Artboard, ArtboardId, Color, Document, Layer, LayerKind, Library, LibraryId, Size, Style,
    SymbolId, SymbolMaster,
};

pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

pub fn artboard_id(id: &str) -> ArtboardId {
    ArtboardId::new(id).unwrap()
}

pub fn library_id(id: &str) -> LibraryId {
    LibraryId::new(id).unwrap()
}

pub fn symbol_id(id: &str) -> SymbolId {
    SymbolId::new(id).unwrap()
}

/// Flat, fill-based icon that can take a mask directly.
pub fn shape_artboard(id: &str, size: Size) -> Artboard {
    let icon = Layer::shape("icon", size).with_style(Style::default().with_fill(Color::BLACK));
    Artboard::new(artboard_id(id), id, size).with_layer(icon)
}

/// Fill-based icon made of nested paths; needs flattening before masking.
pub fn vector_artboard(id: &str, size: Size) -> Artboard {
    let path = Layer::shape("path", size).with_style(Style::default().with_fill(Color::BLACK));
    let icon = Layer::new("icon", LayerKind::Vector, size).with_children(vec![path]);
    Artboard::new(artboard_id(id), id, size).with_layer(icon)
}

/// Stroke-based icon with a stroked child path.
pub fn stroke_artboard(id: &str, size: Size) -> Artboard {
    let stroke = Style::default().with_border(Color::BLACK, 2.0);
    let path = Layer::shape("path", size).with_style(stroke.clone());
    let icon = Layer::new("icon", LayerKind::Vector, size)
        .with_style(stroke)
        .with_children(vec![path]);
    Artboard::new(artboard_id(id), id, size).with_layer(icon)
}

pub fn brand_library() -> Library {
    Library::new(library_id("brand"), "Brand Colors")
}

pub fn blue_master() -> SymbolMaster {
    SymbolMaster::new(symbol_id("blue"), "Blue", Size::new(10.0, 10.0)).with_color(BLUE)
}

#[derive(Default)]
pub struct InMemoryLibraries {
    libraries: BTreeMap<LibraryId, (Library, Vec<SymbolMaster>)>,
    broken: HashSet<LibraryId>,
    pub loads: RefCell<Vec<LibraryId>>,
}

impl InMemoryLibraries {
    pub fn with_brand() -> Self {
        Self::default().with_library(brand_library(), vec![blue_master()])
    }

    pub fn with_library(mut self, library: Library, symbols: Vec<SymbolMaster>) -> Self {
        self.libraries
            .insert(library.id.clone(), (library, symbols));
        self
    }

    /// Resolvable but fails to load.
    pub fn with_broken(mut self, library: Library) -> Self {
        self.broken.insert(library.id.clone());
        self.with_library(library, Vec::new())
    }

    pub fn load_count(&self) -> usize {
        self.loads.borrow().len()
    }
}

impl LibraryService for InMemoryLibraries {
    fn resolve_library_by_id(&self, id: &LibraryId) -> Result<Library> {
        self.libraries
            .get(id)
            .map(|(library, _)| library.clone())
            .ok_or_else(|| MaskError::LibraryUnavailable {
                library: id.clone(),
                reason: "not installed".to_string(),
            })
    }

    async fn load(&self, library: &Library) -> Result<()> {
        if self.broken.contains(&library.id) {
            return Err(MaskError::LibraryUnavailable {
                library: library.id.clone(),
                reason: "load failed".to_string(),
            });
        }
        self.loads.borrow_mut().push(library.id.clone());
        Ok(())
    }

    async fn import_symbol_into(
        &self,
        symbol: &SymbolMaster,
        library: &Library,
        document: &mut Document,
    ) -> Result<SymbolMaster> {
        let local = symbol.clone().imported_from(library.id.clone());
        if document.symbol(&local.id).is_none() {
            document.symbols.push(local.clone());
        }
        Ok(local)
    }

    fn lookup_symbol_in_library(
        &self,
        library: &Library,
        symbol: &SymbolId,
    ) -> Option<SymbolMaster> {
        self.libraries
            .get(&library.id)
            .and_then(|(_, symbols)| symbols.iter().find(|master| &master.id == symbol))
            .cloned()
    }
}

/// Turns any artwork into a single shape carrying the first fill it finds.
#[derive(Default)]
pub struct ShapeFlattener {
    pub calls: Cell<usize>,
    pub fail: bool,
}

impl ShapeFlattener {
    pub fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            fail: true,
        }
    }
}

fn first_fill(layer: &Layer) -> Option<Color> {
    layer
        .style
        .first_fill_color()
        .or_else(|| layer.children.iter().find_map(first_fill))
}

impl VectorFlattener for ShapeFlattener {
    async fn flatten_to_maskable(&self, layer: &Layer) -> Result<Layer> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(MaskError::Flatten("svg conversion failed".to_string()));
        }
        let color = first_fill(layer).unwrap_or(Color::BLACK);
        Ok(Layer::shape(layer.name.clone(), layer.size)
            .with_style(Style::default().with_fill(color)))
    }
}

#[derive(Debug, Default)]
pub struct VecSelection {
    pub ids: Vec<ArtboardId>,
    pub cleared: bool,
}

impl VecSelection {
    pub fn of(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| artboard_id(id)).collect(),
            cleared: false,
        }
    }
}

impl SelectionSource for VecSelection {
    fn selected_artboards(&self) -> Vec<ArtboardId> {
        self.ids.clone()
    }

    fn clear_selection(&mut self) {
        self.ids.clear();
        self.cleared = true;
    }
}
