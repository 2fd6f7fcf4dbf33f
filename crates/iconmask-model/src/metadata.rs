//! The mask metadata record persisted on artboards.
//!
//! Three string annotations describe where an artboard's color comes from:
//!
//! | key           | meaning                                        |
//! |---------------|------------------------------------------------|
//! | `colorLib`    | id of the library the color symbol came from   |
//! | `color`       | id of the color symbol master                  |
//! | `colorPicker` | literal color, `#RRGGBB` / `#RRGGBBAA`          |
//!
//! Either the library group (`colorLib` + `color`) or `colorPicker` is live,
//! never both. [`MaskMetadata`] can only be constructed in a consistent
//! shape; records read back from a host may not be, which
//! [`MaskMetadata::is_consistent`] reports.

use std::fmt;

use serde::Serialize;

use crate::{Color, LibraryId, ModelError, SymbolId};

/// Metadata keys owned by the mask engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    ColorLib,
    Color,
    ColorPicker,
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 3] = [
        MetadataKey::ColorLib,
        MetadataKey::Color,
        MetadataKey::ColorPicker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::ColorLib => "colorLib",
            MetadataKey::Color => "color",
            MetadataKey::ColorPicker => "colorPicker",
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic string annotation storage on an artboard-like entity.
pub trait MetadataBackend {
    fn value_for_key(&self, key: &str) -> Option<String>;

    /// `None` removes the annotation.
    fn set_value_for_key(&mut self, key: &str, value: Option<String>);
}

/// Where a mask takes its color from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorReference {
    Picker(Color),
    /// A symbol master. Without a library id the master lives in the local
    /// document.
    LibrarySymbol {
        library: Option<LibraryId>,
        symbol: SymbolId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskMetadata {
    color_lib: Option<String>,
    color: Option<String>,
    color_picker: Option<String>,
}

impl MaskMetadata {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn picker(color: Color) -> Self {
        Self {
            color_picker: Some(color.to_hex_string()),
            ..Self::default()
        }
    }

    pub fn library_symbol(library: Option<&LibraryId>, symbol: &SymbolId) -> Self {
        Self {
            color_lib: library.map(|id| id.as_str().to_string()),
            color: Some(symbol.as_str().to_string()),
            color_picker: None,
        }
    }

    pub fn from_reference(reference: &ColorReference) -> Self {
        match reference {
            ColorReference::Picker(color) => Self::picker(*color),
            ColorReference::LibrarySymbol { library, symbol } => {
                Self::library_symbol(library.as_ref(), symbol)
            }
        }
    }

    /// Rebuilds a record from raw stored values. Blank values count as unset.
    /// The result is not checked for consistency.
    pub fn from_stored(
        color_lib: Option<String>,
        color: Option<String>,
        color_picker: Option<String>,
    ) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }
        Self {
            color_lib: non_blank(color_lib),
            color: non_blank(color),
            color_picker: non_blank(color_picker),
        }
    }

    pub fn color_lib(&self) -> Option<&str> {
        self.color_lib.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn color_picker(&self) -> Option<&str> {
        self.color_picker.as_deref()
    }

    pub fn value(&self, key: MetadataKey) -> Option<&str> {
        match key {
            MetadataKey::ColorLib => self.color_lib(),
            MetadataKey::Color => self.color(),
            MetadataKey::ColorPicker => self.color_picker(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color_lib.is_none() && self.color.is_none() && self.color_picker.is_none()
    }

    /// At most one group is live and `colorLib` never appears without
    /// `color`.
    pub fn is_consistent(&self) -> bool {
        let library_group = self.color_lib.is_some() || self.color.is_some();
        let dangling_library = self.color_lib.is_some() && self.color.is_none();
        !(library_group && self.color_picker.is_some()) && !dangling_library
    }

    /// Decodes the live group. A picker value takes precedence over a library
    /// group when a host wrote both.
    pub fn reference(&self) -> Result<Option<ColorReference>, ModelError> {
        if let Some(picker) = &self.color_picker {
            return Ok(Some(ColorReference::Picker(Color::parse(picker)?)));
        }
        let Some(symbol) = &self.color else {
            return Ok(None);
        };
        let library = self.color_lib.as_deref().map(LibraryId::new).transpose()?;
        Ok(Some(ColorReference::LibrarySymbol {
            library,
            symbol: SymbolId::new(symbol.as_str())?,
        }))
    }
}
