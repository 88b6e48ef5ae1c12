//! Per-page content stream builder.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use rollbook_render_core::StandardFont;
use rollbook_types::Color;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Operations for one page. All arguments are PDF points, bottom-up.
pub(crate) struct PageContent {
    content: Content,
    state: PageRenderState,
}

impl PageContent {
    pub(crate) fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let (r, g, b) = color.to_unit();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.stroke_color != Some(color) {
            let (r, g, b) = color.to_unit();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    pub(crate) fn text(&mut self, font: StandardFont, size: f32, x: f32, baseline: f32, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.set_fill_color(Color::BLACK);
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(font.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        );
        self.push("Td", vec![x.into(), baseline.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    pub(crate) fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.set_fill_color(color);
        self.push("re", vec![x.into(), y.into(), w.into(), h.into()]);
        self.push("f", vec![]);
    }

    pub(crate) fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.set_stroke(Color::BLACK, width);
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }

    pub(crate) fn image(&mut self, name: &str, x: f32, y: f32, w: f32, h: f32) {
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                w.into(),
                0.into(),
                0.into(),
                h.into(),
                x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }
}

/// Latin-1 code points map straight onto WinAnsiEncoding bytes.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
