//! Layers inside an artboard.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{LibraryId, Style, SymbolId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// How a clipping mask crops the layers above it.
///
/// The ordinals match the values stored by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ClippingMaskMode {
    /// Crop to the mask's alpha channel.
    Alpha = 0,
    /// Crop to the mask's outline.
    #[default]
    Outline = 1,
}

impl ClippingMaskMode {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerKind {
    /// Container of child layers.
    Group,
    /// Unflattened vector artwork, possibly with nested paths.
    Vector,
    /// A single flat shape, the only form a clipping mask is built on.
    Shape,
    /// Instance of a symbol master. `library` is set when the master was
    /// imported from an external library.
    SymbolInstance {
        symbol: SymbolId,
        #[serde(default)]
        library: Option<LibraryId>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    pub size: Size,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub has_clipping_mask: bool,
    #[serde(default)]
    pub clipping_mask_mode: ClippingMaskMode,
    #[serde(default)]
    pub children: Vec<Layer>,
}

impl Layer {
    pub fn new(name: impl Into<String>, kind: LayerKind, size: Size) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            style: Style::default(),
            has_clipping_mask: false,
            clipping_mask_mode: ClippingMaskMode::default(),
            children: Vec::new(),
        }
    }

    pub fn shape(name: impl Into<String>, size: Size) -> Self {
        Self::new(name, LayerKind::Shape, size)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Layer>) -> Self {
        self.children = children;
        self
    }

    /// A flat shape without children can carry a clipping mask as is.
    pub fn is_mask_ready(&self) -> bool {
        matches!(self.kind, LayerKind::Shape) && self.children.is_empty()
    }

    pub fn set_height_respecting_proportions(&mut self, height: f64) {
        if self.size.height > 0.0 {
            self.size.width *= height / self.size.height;
        }
        self.size.height = height;
    }

    pub fn set_width_respecting_proportions(&mut self, width: f64) {
        if self.size.width > 0.0 {
            self.size.height *= width / self.size.width;
        }
        self.size.width = width;
    }

    /// Paths of this layer and all descendants, depth first, relative to
    /// `base`.
    pub fn descendant_paths(&self, base: &LayerPath) -> Vec<LayerPath> {
        let mut paths = vec![base.clone()];
        for (index, child) in self.children.iter().enumerate() {
            paths.extend(child.descendant_paths(&base.child(index)));
        }
        paths
    }

    pub fn child_at(&self, indices: &[usize]) -> Option<&Layer> {
        match indices.split_first() {
            None => Some(self),
            Some((first, rest)) => self.children.get(*first)?.child_at(rest),
        }
    }

    pub fn child_at_mut(&mut self, indices: &[usize]) -> Option<&mut Layer> {
        match indices.split_first() {
            None => Some(self),
            Some((first, rest)) => self.children.get_mut(*first)?.child_at_mut(rest),
        }
    }
}

/// Location of a layer inside an artboard: the index of the top-level layer
/// followed by child indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerPath(Vec<usize>);

impl LayerPath {
    pub fn top(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn icon() -> Self {
        Self::top(0)
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for LayerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "/{}", rendered.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_resize_keeps_aspect() {
        let mut layer = Layer::shape("mask", Size::new(10.0, 20.0));
        layer.set_height_respecting_proportions(40.0);
        assert_eq!(layer.size, Size::new(20.0, 40.0));
        layer.set_width_respecting_proportions(10.0);
        assert_eq!(layer.size, Size::new(10.0, 20.0));
    }

    #[test]
    fn descendant_paths_are_depth_first() {
        let leaf = Layer::shape("leaf", Size::new(1.0, 1.0));
        let group = Layer::new("group", LayerKind::Group, Size::new(1.0, 1.0))
            .with_children(vec![leaf.clone(), leaf]);
        let root = Layer::new("root", LayerKind::Vector, Size::new(1.0, 1.0))
            .with_children(vec![group]);

        let paths: Vec<String> = root
            .descendant_paths(&LayerPath::icon())
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(paths, vec!["/0", "/0/0", "/0/0/0", "/0/0/1"]);
    }

    #[test]
    fn mask_ready_requires_flat_shape() {
        let shape = Layer::shape("icon", Size::new(24.0, 24.0));
        assert!(shape.is_mask_ready());
        let vector = Layer::new("icon", LayerKind::Vector, Size::new(24.0, 24.0));
        assert!(!vector.is_mask_ready());
    }
}
