//! Layer styles: fills and borders.

use serde::{Deserialize, Serialize};

use crate::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
    pub enabled: bool,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            enabled: true,
        }
    }
}

/// A stroke on a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub color: Color,
    pub enabled: bool,
    pub thickness: f64,
}

impl Border {
    pub fn new(color: Color, thickness: f64) -> Self {
        Self {
            color,
            enabled: true,
            thickness,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(default)]
    pub borders: Vec<Border>,
}

impl Style {
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fills.push(Fill::new(color));
        self
    }

    pub fn with_border(mut self, color: Color, thickness: f64) -> Self {
        self.borders.push(Border::new(color, thickness));
        self
    }

    pub fn has_enabled_border(&self) -> bool {
        self.borders.iter().any(|border| border.enabled)
    }

    pub fn has_enabled_fill(&self) -> bool {
        self.fills.iter().any(|fill| fill.enabled)
    }

    /// Color of the first fill, enabled or not.
    pub fn first_fill_color(&self) -> Option<Color> {
        self.fills.first().map(|fill| fill.color)
    }

    pub fn enabled_fills(&self) -> impl Iterator<Item = &Fill> {
        self.fills.iter().filter(|fill| fill.enabled)
    }

    pub fn disable_all_fills(&mut self) {
        for fill in &mut self.fills {
            fill.enabled = false;
        }
    }

    /// Replaces every fill with a single enabled fill of `color`.
    pub fn replace_fills(&mut self, color: Color) {
        self.fills.clear();
        self.fills.push(Fill::new(color));
    }

    /// Recolors enabled borders only; disabled ones keep their color.
    pub fn tint_enabled_borders(&mut self, color: Color) {
        for border in self.borders.iter_mut().filter(|border| border.enabled) {
            border.color = color;
        }
    }
}
