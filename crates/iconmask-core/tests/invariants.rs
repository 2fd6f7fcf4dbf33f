//! Properties that hold after any sequence of apply/remove operations.

mod common;

use common::{
    InMemoryLibraries, ShapeFlattener, artboard_id, blue_master, brand_library, shape_artboard,
    stroke_artboard, vector_artboard,
};
use iconmask_core::{
    ColorRequest, LibraryLoads, MaskOrchestrator, MaskState, mask_state, read_mask_metadata,
};
use iconmask_model::{Artboard, Color, Document, MaskOptions, Size};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Picker(u8, u8, u8),
    Library,
    Remove,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Step::Picker(r, g, b)),
        Just(Step::Library),
        Just(Step::Remove),
    ]
}

fn initial_artboard(kind: u8) -> Artboard {
    let size = Size::new(24.0, 32.0);
    match kind {
        0 => shape_artboard("icon", size),
        1 => vector_artboard("icon", size),
        _ => stroke_artboard("icon", size),
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn metadata_groups_stay_exclusive(
        kind in 0u8..3,
        steps in prop::collection::vec(step_strategy(), 1..12),
    ) {
        let orchestrator = MaskOrchestrator::new(
            InMemoryLibraries::with_brand(),
            ShapeFlattener::default(),
            MaskOptions::default(),
        );
        let id = artboard_id("icon");
        let is_stroke = kind == 2;
        let mut document = Document {
            artboards: vec![initial_artboard(kind)],
            symbols: Vec::new(),
        };
        let mut loads = LibraryLoads::new(true);

        for step in steps {
            let expected_picker = match step {
                Step::Picker(r, g, b) => {
                    let color = Color::from_rgba8(r, g, b, 255);
                    pollster::block_on(orchestrator.apply_to_artboard(
                        &mut document,
                        &id,
                        &ColorRequest::picker(color),
                        &mut loads,
                    ))
                    .unwrap_or_else(|e| panic!("apply picker failed: {e}"));
                    Some(color.to_hex_string())
                }
                Step::Library => {
                    pollster::block_on(orchestrator.apply_to_artboard(
                        &mut document,
                        &id,
                        &ColorRequest::library_symbol(brand_library(), blue_master()),
                        &mut loads,
                    ))
                    .unwrap_or_else(|e| panic!("apply library failed: {e}"));
                    None
                }
                Step::Remove => {
                    orchestrator
                        .remove_from_artboard(&mut document, &id)
                        .unwrap_or_else(|e| panic!("remove failed: {e}"));
                    None
                }
            };

            let artboard = document.artboard(&id).unwrap();
            let record = read_mask_metadata(artboard);
            prop_assert!(record.is_consistent());
            prop_assert!(artboard.layers.len() <= 2);
            prop_assert_eq!(artboard.has_clipping_mask(), artboard.layers.len() == 2);
            if is_stroke {
                prop_assert_eq!(artboard.layers.len(), 1);
            }

            match step {
                Step::Picker(..) => {
                    prop_assert_eq!(record.color_picker().map(str::to_string), expected_picker);
                    prop_assert_eq!(record.color(), None);
                    prop_assert_eq!(record.color_lib(), None);
                }
                Step::Library => {
                    prop_assert_eq!(record.color_lib(), Some("brand"));
                    prop_assert_eq!(record.color(), Some("blue"));
                    prop_assert_eq!(record.color_picker(), None);
                }
                Step::Remove => {
                    prop_assert!(record.is_empty());
                    prop_assert_eq!(mask_state(artboard).unwrap(), MaskState::NoMask);
                }
            }
        }
    }
}
