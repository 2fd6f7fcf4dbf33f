//! Reading and writing the mask metadata record.
//!
//! Writes always touch all three keys, so a record switching from the
//! library group to a picker color (or back) never leaves stale fields.

use iconmask_model::{MaskMetadata, MetadataBackend, MetadataKey};
use tracing::trace;

use crate::ColorRequest;

pub fn read_mask_metadata<B: MetadataBackend + ?Sized>(backend: &B) -> MaskMetadata {
    MaskMetadata::from_stored(
        backend.value_for_key(MetadataKey::ColorLib.as_str()),
        backend.value_for_key(MetadataKey::Color.as_str()),
        backend.value_for_key(MetadataKey::ColorPicker.as_str()),
    )
}

pub fn write_mask_metadata<B: MetadataBackend + ?Sized>(backend: &mut B, record: &MaskMetadata) {
    for key in MetadataKey::ALL {
        let value = record.value(key).map(str::to_string);
        trace!(key = %key, value = ?value, "write mask metadata");
        backend.set_value_for_key(key.as_str(), value);
    }
}

pub fn clear_mask_metadata<B: MetadataBackend + ?Sized>(backend: &mut B) {
    write_mask_metadata(backend, &MaskMetadata::empty());
}

/// The record persisted for `request`.
pub fn register_mask(request: &ColorRequest) -> MaskMetadata {
    MaskMetadata::from_reference(&request.reference())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use iconmask_model::{Color, Library, LibraryId, Size, SymbolId, SymbolMaster};

    use super::*;

    #[derive(Default)]
    struct MapBackend(BTreeMap<String, String>);

    impl MetadataBackend for MapBackend {
        fn value_for_key(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_value_for_key(&mut self, key: &str, value: Option<String>) {
            match value {
                Some(value) => {
                    self.0.insert(key.to_string(), value);
                }
                None => {
                    self.0.remove(key);
                }
            }
        }
    }

    fn library_request() -> ColorRequest {
        let library = Library::new(LibraryId::new("lib").unwrap(), "Brand");
        let master =
            SymbolMaster::new(SymbolId::new("blue").unwrap(), "Blue", Size::new(8.0, 8.0));
        ColorRequest::library_symbol(library, master)
    }

    #[test]
    fn switching_to_picker_drops_library_keys() {
        let mut backend = MapBackend::default();
        write_mask_metadata(&mut backend, &register_mask(&library_request()));
        assert_eq!(backend.0.len(), 2);

        let picker = ColorRequest::picker(Color::BLACK);
        write_mask_metadata(&mut backend, &register_mask(&picker));

        assert_eq!(backend.0.len(), 1);
        assert_eq!(
            backend.value_for_key("colorPicker").as_deref(),
            Some("#000000")
        );
    }

    #[test]
    fn clear_then_read_is_empty() {
        let mut backend = MapBackend::default();
        write_mask_metadata(&mut backend, &register_mask(&library_request()));
        clear_mask_metadata(&mut backend);
        assert!(read_mask_metadata(&backend).is_empty());
    }
}
