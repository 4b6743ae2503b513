//! Render module
//!
//! Contains swatch painting helpers and grid geometry for the mixer UI.

pub mod swatch;

pub use swatch::{
    fill_swatch, grid_cell_rect, grid_size, paint_remove_button, paint_swatch, remove_button_rect,
};
