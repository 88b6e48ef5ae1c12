//! Column grid for one section.

use rollbook_types::{DirectoryConfig, PT_PER_MM, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub page: Size,
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub columns: u32,
    pub gutter: f32,
    pub column_width: f32,
}

impl PageFrame {
    /// `columns` equal columns separated by `gutter` between the margins.
    pub fn new(page: Size, config: &DirectoryConfig, columns: u32, gutter: f32) -> Self {
        let columns = columns.max(1);
        let usable = page.width - config.left_margin - config.right_margin;
        let column_width = (usable - (columns as f32 - 1.0) * gutter) / columns as f32;
        Self {
            page,
            top: config.top_margin,
            left: config.left_margin,
            bottom: config.bottom_margin,
            right: config.right_margin,
            columns,
            gutter,
            column_width,
        }
    }

    pub fn column_x(&self, column: u32) -> f32 {
        self.left + column as f32 * (self.column_width + self.gutter)
    }

    /// Lowest Y content may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.page.height - self.bottom
    }

    pub fn content_width(&self) -> f32 {
        self.page.width - self.left - self.right
    }
}

/// Space kept free below the top margin on a section's first page for the
/// section header: two lines at the header font size.
pub fn header_offset(font_size_pt: f32) -> f32 {
    2.0 * (font_size_pt + 2.0) / PT_PER_MM
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_types::PageSize;

    #[test]
    fn test_default_roster_grid() {
        let config = DirectoryConfig::default();
        let page = PageSize::Letter.dimensions_mm();
        let frame = PageFrame::new(page, &config, 3, 4.0);
        // (215.9 - 8 - 8) / 3
        assert!((frame.column_width - 66.633).abs() < 0.01);
        assert_eq!(frame.column_x(0), 4.0);
        assert!((frame.column_x(2) - (4.0 + 2.0 * 70.633)).abs() < 0.01);
        assert!((frame.bottom_limit() - 273.4).abs() < 0.01);
    }

    #[test]
    fn test_header_offset() {
        // 9pt = 3.175mm, two lines
        assert!((header_offset(7.0) - 6.35).abs() < 0.001);
    }
}
