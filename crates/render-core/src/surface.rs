use rollbook_types::{Color, PT_PER_MM, Point, Rect, Size};

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A baseline JPEG with three 8-bit RGB components, ready to embed.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Natural pixel dimensions of a registered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageInfo {
    /// Drawn height in mm when scaled to `width` mm.
    pub fn height_for_width(&self, width: f32) -> f32 {
        if self.width_px == 0 {
            return 0.0;
        }
        width * self.height_px as f32 / self.width_px as f32
    }
}

/// The drawing capability the layout engine needs from a backend.
///
/// Coordinates are millimetres from the top-left corner of the page; font
/// sizes are points. Draw calls apply to the most recently added page.
pub trait Surface {
    fn page_size(&self) -> Size;

    fn add_page(&mut self);

    fn page_count(&self) -> usize;

    fn set_font(&mut self, family: &str, weight: FontWeight, size_pt: f32);

    /// Changes the size of the current face.
    fn set_font_size(&mut self, size_pt: f32);

    fn font_size(&self) -> f32;

    /// Current font size in mm.
    fn font_height(&self) -> f32 {
        self.font_size() / PT_PER_MM
    }

    /// Width in mm of `text` at the current font.
    fn string_width(&self, text: &str) -> f32;

    /// Stroke width in mm used by `line`.
    fn line_width(&self) -> f32;

    /// Draws `text` in the box `(x, y, w, h)`, vertically centred and
    /// horizontally aligned by `align`. Text is not clipped to the box.
    fn cell(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: &str,
        align: HAlign,
    ) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn line(&mut self, from: Point, to: Point) -> Result<(), RenderError>;

    /// Makes `image` drawable under `id`. Registering the same id again
    /// replaces the earlier image.
    fn register_image(&mut self, id: &str, image: EncodedImage) -> Result<(), RenderError>;

    fn image_info(&self, id: &str) -> Option<ImageInfo>;

    /// Places a registered image at `(x, y)` scaled to `width` mm, keeping
    /// its aspect ratio.
    fn draw_image(&mut self, id: &str, x: f32, y: f32, width: f32) -> Result<(), RenderError>;

    /// Serializes the finished document.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
