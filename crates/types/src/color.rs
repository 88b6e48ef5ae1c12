use serde::{Deserialize, Serialize};

/// An opaque RGB fill or stroke colour.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// The gray that a black fill at `opacity` produces over white paper.
    pub fn highlight(opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let level = (255.0 - opacity * 255.0).ceil();
        Self::gray(level as u8)
    }

    /// Components scaled to `0.0..=1.0` for PDF colour operators.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}
