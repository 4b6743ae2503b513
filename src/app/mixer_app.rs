//! Main mixer application
//!
//! Implements the egui App trait for the color mixer widget.

use egui::{Align, Button, Color32, Layout, RichText, Sense, Vec2};
use tracing::{info, warn};

use crate::config::{MixerConfig, BASE_COLOR_COUNT};
use crate::render::{
    fill_swatch, grid_cell_rect, grid_size, paint_remove_button, paint_swatch, remove_button_rect,
};
use crate::utils::color::{encode, Rgb};

use super::state::MixerState;

/// Main mixer application
pub struct MixerApp {
    /// Seed values and layout constants
    config: MixerConfig,
    /// Base colors, mixed color and palette
    state: MixerState,
}

impl MixerApp {
    /// Create new mixer application
    pub fn new(_cc: &eframe::CreationContext<'_>, config: MixerConfig, state: MixerState) -> Self {
        info!(
            "Mixer initialized: mixed {} from {} base colors, {} palette colors",
            state.mixed_color(),
            state.base_colors().len(),
            state.palette().len()
        );

        Self { config, state }
    }

    /// Lay out one frame of the widget
    fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    // Title
                    ui.heading(RichText::new("Interactive Color Mixer 🎨").strong());
                    ui.add_space(12.0);

                    self.render_base_pickers(ui);
                    ui.add_space(12.0);

                    self.render_mixed_preview(ui);
                    ui.add_space(8.0);

                    let add = Button::new(RichText::new("Add to Palette").color(Color32::WHITE))
                        .fill(Color32::from_rgb(59, 130, 246));
                    if ui.add(add).clicked() {
                        self.state.add_current_mixed_color();
                    }
                    ui.add_space(12.0);

                    self.render_palette(ui);

                    // Status display
                    ui.separator();
                    ui.label(RichText::new(format!(
                        "Palette: {} colors | Mixed: {}",
                        self.state.palette().len(),
                        encode(self.state.mixed_color())
                    )).color(Color32::GRAY).small());
                });
            });
        });
    }

    /// Row of native color pickers, one fixed-size cell per base color
    fn render_base_pickers(&mut self, ui: &mut egui::Ui) {
        let layout = self.config.layout;
        let cell = Vec2::new(
            layout.swatch.picker,
            layout.swatch.picker + layout.picker_label_height,
        );
        let row_width = BASE_COLOR_COUNT as f32 * cell.x
            + (BASE_COLOR_COUNT - 1) as f32 * layout.picker_spacing;
        let mut edits: Vec<(usize, Rgb)> = Vec::new();

        ui.allocate_ui_with_layout(
            Vec2::new(row_width, cell.y),
            Layout::left_to_right(Align::Min),
            |ui| {
                ui.spacing_mut().item_spacing.x = layout.picker_spacing;

                for (index, color) in self.state.base_colors().iter().enumerate() {
                    ui.allocate_ui_with_layout(cell, Layout::top_down(Align::Center), |ui| {
                        ui.set_width(cell.x);
                        ui.spacing_mut().interact_size = Vec2::splat(layout.swatch.picker);

                        let mut channels = color.to_array();
                        if ui.color_edit_button_srgb(&mut channels).changed() {
                            edits.push((index, Rgb::from(channels)));
                        }
                        ui.label(RichText::new(format!("Color {}", index + 1)).small());
                    });
                }
            },
        );

        for (index, color) in edits {
            if let Err(e) = self.state.set_base_color_at(index, color) {
                warn!("Ignoring base color edit: {}", e);
            }
        }
    }

    /// Mixed color preview square with its hex caption
    fn render_mixed_preview(&self, ui: &mut egui::Ui) {
        let swatch = self.config.layout.swatch;
        let mixed = self.state.mixed_color();

        ui.vertical_centered(|ui| {
            paint_swatch(ui, swatch.preview, swatch.rounding, mixed);
            ui.label(RichText::new(format!("Mixed Color: {}", encode(mixed))).strong());
        });
    }

    /// Palette grid; each cell carries a remove button in its corner
    fn render_palette(&mut self, ui: &mut egui::Ui) {
        let layout = self.config.layout;
        let columns = self.config.palette_columns();
        let cell = layout.swatch.palette;
        let spacing = layout.palette_spacing;
        let mut removal: Option<usize> = None;

        let size = grid_size(self.state.palette().len(), columns, cell, spacing);
        let (grid_rect, _response) = ui.allocate_exact_size(size, Sense::hover());

        for (index, color) in self.state.palette().iter().enumerate() {
            let rect = grid_cell_rect(grid_rect.min, index, columns, cell, spacing);
            if !ui.is_rect_visible(rect) {
                continue;
            }
            fill_swatch(ui.painter(), rect, layout.swatch.rounding, *color);

            let button_rect =
                remove_button_rect(rect, layout.remove_button, layout.remove_button_inset);
            let response = ui
                .interact(button_rect, ui.id().with(("palette_remove", index)), Sense::click())
                .on_hover_text(format!("Remove {}", encode(*color)));
            paint_remove_button(ui.painter(), button_rect, response.hovered());

            if response.clicked() {
                removal = Some(index);
            }
        }

        if let Some(index) = removal {
            if let Err(e) = self.state.remove_at(index) {
                warn!("Ignoring palette removal: {}", e);
            }
        }
    }
}

impl eframe::App for MixerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
