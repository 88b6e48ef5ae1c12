//! Page geometry in millimetres.

use serde::{Deserialize, Serialize};

/// Points per millimetre (1 pt = 25.4 / 72 mm).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Clips the rectangle vertically to `[top, bottom]`.
    /// Returns `None` when nothing is left.
    pub fn clamp_vertical(self, top: f32, bottom: f32) -> Option<Rect> {
        let y0 = self.y.max(top);
        let y1 = self.bottom().min(bottom);
        if y1 - y0 <= 0.0 {
            return None;
        }
        Some(Rect::new(self.x, y0, self.width, y1 - y0))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Named paper sizes accepted in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PageSize {
    #[default]
    Letter,
    Legal,
    A3,
    A4,
    A5,
    Tabloid,
}

impl PageSize {
    /// Case-insensitive lookup of a paper size name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "letter" => Some(PageSize::Letter),
            "legal" => Some(PageSize::Legal),
            "a3" => Some(PageSize::A3),
            "a4" => Some(PageSize::A4),
            "a5" => Some(PageSize::A5),
            "tabloid" => Some(PageSize::Tabloid),
            _ => None,
        }
    }

    /// Portrait dimensions in millimetres.
    pub fn dimensions_mm(self) -> Size {
        let (w_pt, h_pt) = match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (420.94, 595.28),
            PageSize::Tabloid => (792.0, 1224.0),
        };
        Size::new(w_pt / PT_PER_MM, h_pt / PT_PER_MM)
    }
}
