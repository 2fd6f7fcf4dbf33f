//! Structural edits to an artboard, expressed as data.
//!
//! The mask engine never edits a live artboard directly. It plans a list of
//! commands which a host adapter replays against the real document.

use serde::Serialize;

use crate::{ClippingMaskMode, Color, Layer, LayerPath};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ArtboardCommand {
    /// Recolor the enabled borders of the layer at `path`.
    TintBorders { path: LayerPath, color: Color },
    /// Swap the icon layer for flattened artwork.
    ReplaceIconLayer { layer: Layer },
    DisableIconFills,
    /// Drop every icon fill and add a single fill of `color`.
    ReplaceIconFills { color: Color },
    SetIconClippingMask {
        enabled: bool,
        mode: ClippingMaskMode,
    },
    AppendLayer { layer: Layer },
    RemoveLastLayer,
}
