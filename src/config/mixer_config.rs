//! MixerConfig data structure
//!
//! Seed colors and layout constants for the color mixer widget.

use crate::utils::color::Rgb;

/// Number of base colors mixed together
pub const BASE_COLOR_COUNT: usize = 3;

/// Mixed color shown before the first mix is computed (`#808080`)
pub const INITIAL_MIXED_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);

/// Square swatch size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchConfig {
    /// Base color picker button
    pub picker: f32,
    /// Mixed color preview
    pub preview: f32,
    /// Palette grid cell
    pub palette: f32,
    /// Corner rounding shared by all swatches
    pub rounding: f32,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            picker: 64.0,
            preview: 96.0,
            palette: 96.0,
            rounding: 8.0,
        }
    }
}

/// Layout configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub swatch: SwatchConfig,
    /// Gap between base color pickers
    pub picker_spacing: f32,
    /// Height reserved under each picker for its label
    pub picker_label_height: f32,
    /// Columns in the palette grid
    pub palette_columns: usize,
    /// Gap between palette cells
    pub palette_spacing: f32,
    /// Side length of the remove button in a palette cell's corner
    pub remove_button: f32,
    /// Inset of the remove button from the cell's top-right corner
    pub remove_button_inset: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            swatch: SwatchConfig::default(),
            picker_spacing: 16.0,
            picker_label_height: 20.0,
            palette_columns: 3,
            palette_spacing: 16.0,
            remove_button: 20.0,
            remove_button_inset: 4.0,
            window_width: 420.0,
            window_height: 720.0,
        }
    }
}

/// Complete mixer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MixerConfig {
    /// Base colors the mixer starts from, as `#rrggbb`
    pub base_colors: [String; BASE_COLOR_COUNT],
    /// Palette entries present before the user adds any, as `#rrggbb`
    pub palette: Vec<String>,
    pub layout: LayoutConfig,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self::get_default()
    }
}

impl MixerConfig {
    /// Default configuration: primaries as base colors and a three-entry palette
    pub fn get_default() -> Self {
        Self {
            base_colors: ["#ff0000", "#00ff00", "#0000ff"].map(String::from),
            palette: ["#3498db", "#e74c3c", "#2ecc71"]
                .into_iter()
                .map(String::from)
                .collect(),
            layout: LayoutConfig::default(),
        }
    }

    // Convenience accessors

    pub fn window_size(&self) -> [f32; 2] {
        [self.layout.window_width, self.layout.window_height]
    }

    pub fn palette_columns(&self) -> usize {
        self.layout.palette_columns.max(1)
    }
}
