//! Column and page flow for a composed section.
//!
//! The cursor only decides where the next block goes. Drawing the footer
//! and starting the page after a `PageBreak` is the caller's job, so the
//! same cursor drives the roster, the index and the children listing.

use crate::algorithms::pagination::check_block_fit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The block fits below the current Y.
    Within,
    /// Moved to the top of the next column on the same page.
    ColumnBreak,
    /// The last column was full. A new page must be started.
    PageBreak,
}

#[derive(Debug, Clone)]
pub struct ColumnCursor {
    columns: u32,
    top: f32,
    header_offset: f32,
    bottom_limit: f32,
    column: u32,
    y: f32,
    first_page: bool,
    page_breaks: usize,
}

impl ColumnCursor {
    /// Starts at column 0, below the header band of the section's first page.
    pub fn new(columns: u32, top: f32, header_offset: f32, bottom_limit: f32) -> Self {
        Self {
            columns: columns.max(1),
            top,
            header_offset,
            bottom_limit,
            column: 0,
            y: top + header_offset,
            first_page: true,
            page_breaks: 0,
        }
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn is_first_page(&self) -> bool {
        self.first_page
    }

    pub fn page_breaks(&self) -> usize {
        self.page_breaks
    }

    /// Y where a fresh column starts on the current page.
    pub fn column_top(&self) -> f32 {
        if self.first_page {
            self.top + self.header_offset
        } else {
            self.top
        }
    }

    pub fn bottom_limit(&self) -> f32 {
        self.bottom_limit
    }

    /// Makes room for a block of `height`, keeping `reserved` free above the
    /// bottom limit. Y is left at the block's top.
    pub fn place(&mut self, height: f32, reserved: f32) -> Advance {
        let fit = check_block_fit(self.y, height, self.bottom_limit - reserved);
        if !fit.should_break {
            return Advance::Within;
        }

        self.column += 1;
        self.y = self.column_top();
        if self.column < self.columns {
            return Advance::ColumnBreak;
        }

        self.column = 0;
        self.first_page = false;
        self.y = self.top;
        self.page_breaks += 1;
        Advance::PageBreak
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }
}
