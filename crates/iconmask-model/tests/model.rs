//! Tests for iconmask-model types.

use iconmask_model::{
    Artboard, ArtboardCommand, ArtboardId, ClippingMaskMode, Color, Layer, LayerKind, LayerPath,
    MetadataBackend, ModelError, Size, Style,
};

fn stroked_artboard() -> Artboard {
    let stroke = Style::default().with_border(Color::BLACK, 2.0);
    let path = Layer::shape("path", Size::new(20.0, 20.0)).with_style(stroke.clone());
    let plain = Layer::shape("dot", Size::new(2.0, 2.0));
    let icon = Layer::new("icon", LayerKind::Vector, Size::new(24.0, 24.0))
        .with_style(stroke)
        .with_children(vec![path, plain]);
    Artboard::new(
        ArtboardId::new("stroked").unwrap(),
        "stroked",
        Size::new(24.0, 24.0),
    )
    .with_layer(icon)
}

#[test]
fn stroked_paths_include_nested_layers() {
    let artboard = stroked_artboard();
    let paths: Vec<String> = artboard
        .stroked_layer_paths()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(paths, vec!["/0", "/0/0"]);
    assert!(artboard.icon_has_stroke());
}

#[test]
fn tint_command_recolors_nested_border() {
    let mut artboard = stroked_artboard();
    let red = Color::rgb(1.0, 0.0, 0.0);
    artboard
        .apply_command(&ArtboardCommand::TintBorders {
            path: LayerPath::icon().child(0),
            color: red,
        })
        .unwrap();
    let nested = artboard.layer_at(&LayerPath::icon().child(0)).unwrap();
    assert_eq!(nested.style.borders[0].color, red);
    let icon = artboard.icon_layer().unwrap();
    assert_eq!(icon.style.borders[0].color, Color::BLACK);
}

#[test]
fn tint_command_on_missing_layer_fails() {
    let mut artboard = stroked_artboard();
    let error = artboard
        .apply_command(&ArtboardCommand::TintBorders {
            path: LayerPath::top(4),
            color: Color::WHITE,
        })
        .unwrap_err();
    assert!(matches!(error, ModelError::MissingLayer { .. }));
}

#[test]
fn mask_commands_build_and_strip_overlay() {
    let icon = Layer::shape("icon", Size::new(24.0, 24.0))
        .with_style(Style::default().with_fill(Color::BLACK));
    let mut artboard = Artboard::new(
        ArtboardId::new("masked").unwrap(),
        "masked",
        Size::new(24.0, 24.0),
    )
    .with_layer(icon);

    artboard
        .apply_commands(&[
            ArtboardCommand::DisableIconFills,
            ArtboardCommand::AppendLayer {
                layer: Layer::shape("overlay", Size::new(24.0, 24.0)),
            },
            ArtboardCommand::SetIconClippingMask {
                enabled: true,
                mode: ClippingMaskMode::Alpha,
            },
        ])
        .unwrap();
    assert!(artboard.has_clipping_mask());
    assert_eq!(artboard.mask_layer().unwrap().name, "overlay");
    assert!(!artboard.icon_layer().unwrap().style.has_enabled_fill());

    artboard
        .apply_commands(&[
            ArtboardCommand::SetIconClippingMask {
                enabled: false,
                mode: ClippingMaskMode::Outline,
            },
            ArtboardCommand::ReplaceIconFills {
                color: Color::BLACK,
            },
            ArtboardCommand::RemoveLastLayer,
        ])
        .unwrap();
    assert!(!artboard.has_clipping_mask());
    assert!(artboard.mask_layer().is_none());
    assert!(artboard.icon_layer().unwrap().style.has_enabled_fill());
}

#[test]
fn removing_last_layer_keeps_the_icon() {
    let mut artboard = Artboard::new(
        ArtboardId::new("solo").unwrap(),
        "solo",
        Size::new(24.0, 24.0),
    )
    .with_layer(Layer::shape("icon", Size::new(24.0, 24.0)));
    assert!(
        artboard
            .apply_command(&ArtboardCommand::RemoveLastLayer)
            .is_err()
    );
    assert_eq!(artboard.layers.len(), 1);
}

#[test]
fn metadata_backend_removes_on_none() {
    let mut artboard = stroked_artboard();
    artboard.set_value_for_key("color", Some("sym".to_string()));
    assert_eq!(artboard.value_for_key("color").as_deref(), Some("sym"));
    artboard.set_value_for_key("color", None);
    assert_eq!(artboard.value_for_key("color"), None);
    assert!(artboard.metadata.is_empty());
}

#[test]
fn blank_ids_are_rejected() {
    assert!(ArtboardId::new("  ").is_err());
}
