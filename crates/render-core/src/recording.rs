use std::collections::HashMap;

use rollbook_types::{Color, Point, Rect, Size};

use crate::error::RenderError;
use crate::metrics::StandardFont;
use crate::surface::{EncodedImage, FontWeight, HAlign, ImageInfo, Surface};

/// One recorded drawing call. `page` is zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Page {
        index: usize,
    },
    Text {
        page: usize,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: String,
        align: HAlign,
        weight: FontWeight,
        size: f32,
    },
    Fill {
        page: usize,
        rect: Rect,
        color: Color,
    },
    Line {
        page: usize,
        from: Point,
        to: Point,
    },
    Image {
        page: usize,
        id: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// A surface that keeps every call for inspection. Text is measured with
/// the same Helvetica metrics the PDF backend uses.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pages: usize,
    weight: FontWeight,
    font_size: f32,
    line_width: f32,
    images: HashMap<String, ImageInfo>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: 0,
            weight: FontWeight::Regular,
            font_size: 12.0,
            line_width: 0.2,
            images: HashMap::new(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Every drawn string, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn texts_on_page(&self, index: usize) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { page, text, .. } if *page == index => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first text op whose string equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }

    pub fn fills(&self) -> Vec<(usize, Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { page, rect, color } => Some((*page, *rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(usize, Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { page, from, to } => Some((*page, *from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    fn current_page(&self) -> Result<usize, RenderError> {
        self.pages.checked_sub(1).ok_or(RenderError::NoPage)
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn add_page(&mut self) {
        self.ops.push(DrawOp::Page { index: self.pages });
        self.pages += 1;
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_font(&mut self, _family: &str, weight: FontWeight, size_pt: f32) {
        self.weight = weight;
        self.font_size = size_pt;
    }

    fn set_font_size(&mut self, size_pt: f32) {
        self.font_size = size_pt;
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn string_width(&self, text: &str) -> f32 {
        StandardFont::for_weight(self.weight).string_width(text, self.font_size)
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn cell(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: &str,
        align: HAlign,
    ) -> Result<(), RenderError> {
        let page = self.current_page()?;
        self.ops.push(DrawOp::Text {
            page,
            x,
            y,
            w,
            h,
            text: text.to_string(),
            align,
            weight: self.weight,
            size: self.font_size,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let page = self.current_page()?;
        self.ops.push(DrawOp::Fill { page, rect, color });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let page = self.current_page()?;
        self.ops.push(DrawOp::Line { page, from, to });
        Ok(())
    }

    fn register_image(&mut self, id: &str, image: EncodedImage) -> Result<(), RenderError> {
        self.images.insert(
            id.to_string(),
            ImageInfo {
                width_px: image.width_px,
                height_px: image.height_px,
            },
        );
        Ok(())
    }

    fn image_info(&self, id: &str) -> Option<ImageInfo> {
        self.images.get(id).copied()
    }

    fn draw_image(&mut self, id: &str, x: f32, y: f32, width: f32) -> Result<(), RenderError> {
        let page = self.current_page()?;
        let info = self
            .image_info(id)
            .ok_or_else(|| RenderError::UnknownImage(id.to_string()))?;
        self.ops.push(DrawOp::Image {
            page,
            id: id.to_string(),
            x,
            y,
            width,
            height: info.height_for_width(width),
        });
        Ok(())
    }

    /// One line per recorded op.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        for op in &self.ops {
            out.push_str(&format!("{:?}\n", op));
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Size::new(215.9, 279.4))
    }

    #[test]
    fn test_drawing_before_a_page_fails() {
        let mut s = surface();
        assert!(matches!(
            s.cell(0.0, 0.0, 10.0, 3.0, "x", HAlign::Left),
            Err(RenderError::NoPage)
        ));
    }

    #[test]
    fn test_records_text_with_font_state() {
        let mut s = surface();
        s.add_page();
        s.set_font("Arial", FontWeight::Bold, 7.0);
        s.cell(4.0, 10.0, 50.0, 3.0, "SMITH, JOHN", HAlign::Left).unwrap();
        s.add_page();
        s.set_font_size(6.5);
        s.cell(4.0, 10.0, 50.0, 3.0, "next", HAlign::Right).unwrap();

        assert_eq!(s.page_count(), 2);
        assert_eq!(s.texts(), vec!["SMITH, JOHN", "next"]);
        assert_eq!(s.texts_on_page(1), vec!["next"]);
        match s.find_text("next") {
            Some(DrawOp::Text { size, weight, align, .. }) => {
                assert_eq!(*size, 6.5);
                assert_eq!(*weight, FontWeight::Bold);
                assert_eq!(*align, HAlign::Right);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_unknown_image_is_an_error() {
        let mut s = surface();
        s.add_page();
        assert!(matches!(
            s.draw_image("missing", 0.0, 0.0, 25.0),
            Err(RenderError::UnknownImage(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_registered_image_keeps_aspect() {
        let mut s = surface();
        s.add_page();
        s.register_image(
            "7",
            EncodedImage {
                data: vec![],
                width_px: 100,
                height_px: 150,
            },
        )
        .unwrap();
        s.draw_image("7", 8.0, 12.0, 25.0).unwrap();
        assert_eq!(s.images(), vec!["7"]);
        assert!(matches!(
            s.ops().last(),
            Some(DrawOp::Image { height, .. }) if (*height - 37.5).abs() < 1e-4
        ));
    }
}
