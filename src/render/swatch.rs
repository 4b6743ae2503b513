//! Swatch rendering
//!
//! Filled rounded squares used for the mixed color preview and the
//! palette grid.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::utils::color::Rgb;

/// Outline drawn around every swatch so light colors stay visible
const SWATCH_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(60),
};

/// Paint `color` into `rect` with an outline
pub fn fill_swatch(painter: &Painter, rect: Rect, rounding: f32, color: Rgb) {
    painter.rect_filled(rect, rounding, color.to_color32());
    painter.rect_stroke(rect, rounding, SWATCH_STROKE);
}

/// Allocate a `size` x `size` square and paint it with `color`
pub fn paint_swatch(ui: &mut Ui, size: f32, rounding: f32, color: Rgb) -> Rect {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());

    if ui.is_rect_visible(rect) {
        fill_swatch(ui.painter(), rect, rounding, color);
    }

    rect
}

/// Round white badge with a red cross
pub fn paint_remove_button(painter: &Painter, rect: Rect, hovered: bool) {
    let fill = if hovered {
        Color32::from_gray(230)
    } else {
        Color32::WHITE
    };
    painter.circle_filled(rect.center(), rect.width() / 2.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "✕",
        FontId::proportional(rect.height() * 0.6),
        Color32::RED,
    );
}

/// Span of `n` cells of side `cell` separated by `spacing`
fn span(n: usize, cell: f32, spacing: f32) -> f32 {
    if n == 0 {
        0.0
    } else {
        n as f32 * cell + (n - 1) as f32 * spacing
    }
}

/// Size of a grid holding `count` square cells, `columns` to a row
///
/// The width always covers every column so the grid does not shift while
/// the first row fills up.
pub fn grid_size(count: usize, columns: usize, cell: f32, spacing: f32) -> Vec2 {
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    Vec2::new(span(columns, cell, spacing), span(rows, cell, spacing))
}

/// Rect of cell `index` in a grid whose top-left corner is `origin`
pub fn grid_cell_rect(origin: Pos2, index: usize, columns: usize, cell: f32, spacing: f32) -> Rect {
    let columns = columns.max(1);
    let stride = cell + spacing;
    let column = (index % columns) as f32;
    let row = (index / columns) as f32;
    Rect::from_min_size(
        origin + Vec2::new(column * stride, row * stride),
        Vec2::splat(cell),
    )
}

/// Square of side `size` in the top-right corner of `swatch`, `inset` from both edges
pub fn remove_button_rect(swatch: Rect, size: f32, inset: f32) -> Rect {
    let size = size.min(swatch.width()).min(swatch.height());
    let inset = inset.clamp(0.0, (swatch.width() - size).max(0.0));
    let min = Pos2::new(swatch.max.x - inset - size, swatch.min.y + inset);
    Rect::from_min_size(min, Vec2::splat(size))
}
