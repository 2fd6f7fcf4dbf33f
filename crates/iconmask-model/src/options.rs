//! Configuration options for mask processing.

use serde::{Deserialize, Serialize};

use crate::{Color, ModelError};

/// Label given to every mask layer the engine creates.
pub const DEFAULT_MASK_LAYER_NAME: &str = "🎨 color";

/// Whether legacy artboards are upgraded when their mask is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyMigrationMode {
    /// Upgrade legacy records in place.
    #[default]
    Upgrade,
    /// Leave legacy artboards untouched; they read as unconfigured.
    Skip,
}

/// Options controlling mask processing behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    /// Name of created mask layers.
    pub mask_layer_name: String,

    /// Border color restored when a stroke-tinted icon is reset.
    ///
    /// The pre-tint stroke color is never recorded, so removal cannot restore
    /// it. Default: opaque black.
    pub stroke_reset_color: Color,

    pub legacy_migration: LegacyMigrationMode,

    /// Remember which libraries were loaded during a batch and skip reloading
    /// them. Loading is idempotent either way.
    pub cache_library_loads: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            mask_layer_name: DEFAULT_MASK_LAYER_NAME.to_string(),
            stroke_reset_color: Color::BLACK,
            legacy_migration: LegacyMigrationMode::Upgrade,
            cache_library_loads: true,
        }
    }
}

impl MaskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML table. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ModelError> {
        toml::from_str(source).map_err(|source| ModelError::Options { source })
    }

    pub fn with_mask_layer_name(mut self, name: impl Into<String>) -> Self {
        self.mask_layer_name = name.into();
        self
    }

    pub fn with_stroke_reset_color(mut self, color: Color) -> Self {
        self.stroke_reset_color = color;
        self
    }

    pub fn with_legacy_migration(mut self, mode: LegacyMigrationMode) -> Self {
        self.legacy_migration = mode;
        self
    }

    pub fn with_library_cache(mut self, enable: bool) -> Self {
        self.cache_library_loads = enable;
        self
    }
}
