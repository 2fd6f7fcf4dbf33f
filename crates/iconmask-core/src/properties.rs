//! Reading an artboard's configured color back out of its metadata.

use iconmask_model::{Artboard, Color, Document, Library, LibraryId, SymbolId, SymbolMaster};
use tracing::{debug, info, warn};

use crate::Result;
use crate::color_source::{ColorResolver, LibraryLoads};
use crate::metadata_store::read_mask_metadata;
use crate::migration::{MigrationAdapter, MigrationOutcome};
use crate::services::LibraryService;

/// Resolved color source of an artboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskProperties {
    pub color_lib: Option<Library>,
    pub color: Option<SymbolMaster>,
    pub color_picker: Option<Color>,
}

impl MaskProperties {
    fn is_empty(&self) -> bool {
        self.color_lib.is_none() && self.color.is_none() && self.color_picker.is_none()
    }
}

/// Read and resolve the metadata record of `artboard`.
///
/// A record that is empty while the icon carries a clipping mask belongs to
/// the legacy format; `migrator` upgrades it in place (when given) before the
/// record is read again.
///
/// Returns `None` when no color source is configured.
///
/// # Errors
///
/// Fails when a referenced library cannot be resolved or loaded, or when a
/// stored value cannot be decoded.
pub async fn mask_properties<L, M>(
    artboard: &mut Artboard,
    document: &Document,
    libraries: &L,
    migrator: Option<&M>,
    loads: &mut LibraryLoads,
) -> Result<Option<MaskProperties>>
where
    L: LibraryService,
    M: MigrationAdapter + ?Sized,
{
    let mut record = read_mask_metadata(artboard);
    if record.is_empty() && artboard.has_clipping_mask() {
        match migrator.map(|migrator| migrator.upgrade(artboard)) {
            Some(MigrationOutcome::Upgraded(_)) => {
                info!(artboard = %artboard.id, "re-reading migrated mask metadata");
                record = read_mask_metadata(artboard);
            }
            Some(outcome) => debug!(artboard = %artboard.id, ?outcome, "no migration applied"),
            None => debug!(artboard = %artboard.id, "legacy migration disabled"),
        }
    }

    let color_picker = record.color_picker().map(Color::parse).transpose()?;
    let library_id = record.color_lib().map(LibraryId::new).transpose()?;
    let symbol_id = record.color().map(SymbolId::new).transpose()?;

    let mut resolver = ColorResolver::new(libraries, loads);
    let (color_lib, color) = match (library_id, symbol_id) {
        (Some(library_id), symbol_id) => {
            let library = resolver.load_library(&library_id).await?;
            let symbol = symbol_id.and_then(|id| {
                let found = libraries.lookup_symbol_in_library(&library, &id);
                if found.is_none() {
                    warn!(
                        library = %library.id,
                        symbol = %id,
                        "color symbol missing from library"
                    );
                }
                found
            });
            (Some(library), symbol)
        }
        (None, Some(symbol_id)) => {
            let symbol = libraries.lookup_symbol_in_document(document, &symbol_id);
            if symbol.is_none() {
                warn!(symbol = %symbol_id, "color symbol missing from document");
            }
            (None, symbol)
        }
        (None, None) => (None, None),
    };

    let properties = MaskProperties {
        color_lib,
        color,
        color_picker,
    };
    Ok((!properties.is_empty()).then_some(properties))
}
