//! Artboards and the document that owns them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    ArtboardCommand, ArtboardId, Layer, LayerPath, MetadataBackend, ModelError, Size, SymbolId,
    SymbolMaster,
};

/// One icon's canvas. The first layer is the icon; a mask overlay, when
/// present, is always the last layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artboard {
    pub id: ArtboardId,
    pub name: String,
    pub size: Size,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Artboard {
    pub fn new(id: ArtboardId, name: impl Into<String>, size: Size) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            layers: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn icon_layer(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// The trailing overlay layer. An artboard with only an icon has none.
    pub fn mask_layer(&self) -> Option<&Layer> {
        if self.layers.len() > 1 {
            self.layers.last()
        } else {
            None
        }
    }

    pub fn has_clipping_mask(&self) -> bool {
        self.icon_layer().is_some_and(|icon| icon.has_clipping_mask)
    }

    pub fn icon_has_stroke(&self) -> bool {
        self.icon_layer()
            .is_some_and(|icon| icon.style.has_enabled_border())
    }

    pub fn layer_at(&self, path: &LayerPath) -> Option<&Layer> {
        let (first, rest) = path.indices().split_first()?;
        self.layers.get(*first)?.child_at(rest)
    }

    pub fn layer_at_mut(&mut self, path: &LayerPath) -> Option<&mut Layer> {
        let (first, rest) = path.indices().split_first()?;
        self.layers.get_mut(*first)?.child_at_mut(rest)
    }

    /// Every layer, at any depth, whose style has an enabled border.
    pub fn stroked_layer_paths(&self) -> Vec<LayerPath> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(index, layer)| layer.descendant_paths(&LayerPath::top(index)))
            .filter(|path| {
                self.layer_at(path)
                    .is_some_and(|layer| layer.style.has_enabled_border())
            })
            .collect()
    }

    fn icon_layer_mut(&mut self) -> Result<&mut Layer, ModelError> {
        let artboard = self.id.to_string();
        self.layers
            .first_mut()
            .ok_or(ModelError::EmptyArtboard { artboard })
    }

    pub fn apply_command(&mut self, command: &ArtboardCommand) -> Result<(), ModelError> {
        match command {
            ArtboardCommand::TintBorders { path, color } => {
                let artboard = self.id.to_string();
                let layer = self
                    .layer_at_mut(path)
                    .ok_or_else(|| ModelError::MissingLayer {
                        artboard,
                        path: path.clone(),
                    })?;
                layer.style.tint_enabled_borders(*color);
            }
            ArtboardCommand::ReplaceIconLayer { layer } => {
                *self.icon_layer_mut()? = layer.clone();
            }
            ArtboardCommand::DisableIconFills => {
                self.icon_layer_mut()?.style.disable_all_fills();
            }
            ArtboardCommand::ReplaceIconFills { color } => {
                self.icon_layer_mut()?.style.replace_fills(*color);
            }
            ArtboardCommand::SetIconClippingMask { enabled, mode } => {
                let icon = self.icon_layer_mut()?;
                icon.has_clipping_mask = *enabled;
                icon.clipping_mask_mode = *mode;
            }
            ArtboardCommand::AppendLayer { layer } => {
                self.layers.push(layer.clone());
            }
            ArtboardCommand::RemoveLastLayer => {
                if self.layers.len() < 2 {
                    return Err(ModelError::MissingLayer {
                        artboard: self.id.to_string(),
                        path: LayerPath::top(1),
                    });
                }
                self.layers.pop();
            }
        }
        Ok(())
    }

    pub fn apply_commands<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a ArtboardCommand>,
    ) -> Result<(), ModelError> {
        for command in commands {
            self.apply_command(command)?;
        }
        Ok(())
    }
}

impl MetadataBackend for Artboard {
    fn value_for_key(&self, key: &str) -> Option<String> {
        self.metadata.get(key).cloned()
    }

    fn set_value_for_key(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.metadata.insert(key.to_string(), value);
            }
            None => {
                self.metadata.remove(key);
            }
        }
    }
}

/// Artboards plus the symbol masters stored locally in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub artboards: Vec<Artboard>,
    #[serde(default)]
    pub symbols: Vec<SymbolMaster>,
}

impl Document {
    pub fn artboard(&self, id: &ArtboardId) -> Option<&Artboard> {
        self.artboards.iter().find(|artboard| &artboard.id == id)
    }

    pub fn artboard_mut(&mut self, id: &ArtboardId) -> Option<&mut Artboard> {
        self.artboards.iter_mut().find(|artboard| &artboard.id == id)
    }

    pub fn symbol(&self, id: &SymbolId) -> Option<&SymbolMaster> {
        self.symbols.iter().find(|symbol| &symbol.id == id)
    }
}
