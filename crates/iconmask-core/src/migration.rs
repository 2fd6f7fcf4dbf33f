//! Upgrading artboards masked by the legacy format.
//!
//! Legacy artboards carry a clipping mask but no metadata record: the color
//! lived only on the mask layer itself. Detection uses a single predicate,
//! [`LegacyMaskMigration::is_legacy`]:
//!
//! - all three metadata keys are empty,
//! - the icon layer has an active clipping mask,
//! - a trailing mask layer exists.
//!
//! Recovery reads the mask layer. A symbol instance yields the library
//! group, a shape with exactly one enabled fill yields a picker color.
//! Anything else is ambiguous and the record stays empty.

use iconmask_model::{Artboard, LayerKind, MaskMetadata};
use tracing::{info, warn};

use crate::metadata_store::{read_mask_metadata, write_mask_metadata};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The artboard did not match the legacy predicate.
    NotLegacy,
    /// Metadata was rebuilt from the mask layer.
    Upgraded(MaskMetadata),
    /// Legacy structure without a recoverable color; nothing was written.
    Ambiguous,
}

/// Upgrades an artboard's metadata in place.
pub trait MigrationAdapter {
    fn upgrade(&self, artboard: &mut Artboard) -> MigrationOutcome;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyMaskMigration;

impl LegacyMaskMigration {
    pub fn is_legacy(artboard: &Artboard) -> bool {
        read_mask_metadata(artboard).is_empty()
            && artboard.has_clipping_mask()
            && artboard.mask_layer().is_some()
    }

    /// Rebuild the record from the mask layer, if it encodes a color.
    pub fn recover(artboard: &Artboard) -> Option<MaskMetadata> {
        let mask = artboard.mask_layer()?;
        match &mask.kind {
            LayerKind::SymbolInstance { symbol, library } => {
                Some(MaskMetadata::library_symbol(library.as_ref(), symbol))
            }
            LayerKind::Shape => {
                let mut fills = mask.style.enabled_fills();
                match (fills.next(), fills.next()) {
                    (Some(fill), None) => Some(MaskMetadata::picker(fill.color)),
                    _ => None,
                }
            }
            LayerKind::Group | LayerKind::Vector => None,
        }
    }
}

impl MigrationAdapter for LegacyMaskMigration {
    fn upgrade(&self, artboard: &mut Artboard) -> MigrationOutcome {
        if !Self::is_legacy(artboard) {
            return MigrationOutcome::NotLegacy;
        }
        match Self::recover(artboard) {
            Some(record) => {
                info!(
                    artboard = %artboard.id,
                    color_lib = ?record.color_lib(),
                    color = ?record.color(),
                    color_picker = ?record.color_picker(),
                    "upgraded legacy mask metadata"
                );
                write_mask_metadata(artboard, &record);
                MigrationOutcome::Upgraded(record)
            }
            None => {
                warn!(
                    artboard = %artboard.id,
                    "legacy mask has no recoverable color; metadata left empty"
                );
                MigrationOutcome::Ambiguous
            }
        }
    }
}
