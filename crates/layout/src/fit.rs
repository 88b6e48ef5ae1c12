//! Shrink-to-fit text sizing.

use rollbook_render_core::{HAlign, RenderError, Surface};

/// Font size decrement per iteration, in points.
pub const SHRINK_STEP: f32 = 0.1;

/// Smallest size text is shrunk to. Wider strings are drawn at this size.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Largest size `<= start` at which `measure(size) <= available`, stepping
/// down by `SHRINK_STEP` and stopping at `MIN_FONT_SIZE`.
///
/// Sizes are computed from `start` rather than accumulated, so the result
/// is the same however many times the search is repeated.
pub fn fit_font_size(start: f32, available: f32, mut measure: impl FnMut(f32) -> f32) -> f32 {
    let mut size = start;
    let mut steps = 0u32;
    while size > MIN_FONT_SIZE && measure(size) > available {
        steps += 1;
        size = (start - steps as f32 * SHRINK_STEP).max(MIN_FONT_SIZE);
    }
    size
}

/// Draws `text` in a cell, shrinking the current font until it fits `w`,
/// then restores the original size.
pub fn shrink_cell(
    surface: &mut dyn Surface,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    text: &str,
    align: HAlign,
) -> Result<f32, RenderError> {
    let original = surface.font_size();
    let size = fit_font_size(original, w, |size| {
        surface.set_font_size(size);
        surface.string_width(text)
    });
    surface.set_font_size(size);
    let drawn = surface.cell(x, y, w, h, text, align);
    surface.set_font_size(original);
    drawn.map(|_| size)
}
