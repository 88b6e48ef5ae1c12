use rollbook_types::PT_PER_MM;

/// Millimetres to PDF user-space points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Convert a top-down Y coordinate to PDF's bottom-up Y (both in points).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Baseline of text vertically centred in a cell of height `h`, matching
/// the classic cell model: half the cell plus 0.3 of the font height.
pub fn cell_baseline(y: f32, h: f32, font_height: f32) -> f32 {
    y + 0.5 * h + 0.3 * font_height
}
