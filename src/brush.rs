//! Brush and eraser tool configuration.
//!
//! Passive shapes the host passes down when mounting the editor. Defaults
//! mirror the stock tool palette. A `fixed` mode pins the user to the
//! default size or color; `defaults` exposes the whole list in the picker.

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

use serde::{Deserialize, Serialize};

/// Whether the size picker offers the full list or only the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    Fixed,
    #[default]
    Defaults,
}

/// Whether the color picker offers the full palette or only the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Fixed,
    #[default]
    Defaults,
}

/// A brush color: a named CSS color or an RGBA quadruple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrushColor {
    Named(String),
    Rgba([u8; 4]),
}

/// Eraser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eraser {
    /// Selectable stroke sizes in native pixels.
    pub sizes: Vec<u32>,
    /// Size preselected when the tool is activated.
    pub default_size: u32,
    pub size_mode: SizeMode,
    /// Soften stroke edges when rasterizing.
    pub antialias: bool,
}

impl Default for Eraser {
    fn default() -> Self {
        Self {
            sizes: vec![5, 10, 20, 40, 70],
            default_size: 20,
            size_mode: SizeMode::Defaults,
            antialias: true,
        }
    }
}

/// Brush configuration: eraser sizing plus a color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    /// Selectable stroke sizes in native pixels.
    pub sizes: Vec<u32>,
    /// Size preselected when the tool is activated.
    pub default_size: u32,
    pub size_mode: SizeMode,
    /// Soften stroke edges when rasterizing.
    pub antialias: bool,
    /// Selectable palette.
    pub colors: Vec<BrushColor>,
    /// Color preselected when the tool is activated.
    pub default_color: BrushColor,
    pub color_mode: ColorMode,
}

impl Default for Brush {
    fn default() -> Self {
        let sizing = Eraser::default();
        Self {
            sizes: sizing.sizes,
            default_size: sizing.default_size,
            size_mode: sizing.size_mode,
            antialias: sizing.antialias,
            colors: ["red", "green", "blue", "yellow", "black", "white"]
                .into_iter()
                .map(|name| BrushColor::Named(name.to_owned()))
                .collect(),
            default_color: BrushColor::Named("red".to_owned()),
            color_mode: ColorMode::Defaults,
        }
    }
}
