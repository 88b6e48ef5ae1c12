use chrono::NaiveDateTime;
use rollbook_render_core::{FontWeight, HAlign, StandardFont, Surface};
use rollbook_traits::{CountryLookup, Transliterator};
use rollbook_types::{Color, DirectoryConfig, Section, Size};

use crate::LayoutError;
use crate::fit::shrink_cell;
use crate::format::as_of_stamp;
use crate::frame::header_offset;
use crate::overrides::OverrideResolver;

pub const BAPTISM_LEGEND: &str = "§ Member pending baptism";
pub const NEW_MEMBER_LEGEND: &str = "* New member in the last 90 days";

/// Counts for one composed section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionStats {
    /// Entries (people, index names or household blocks) drawn.
    pub drawn: usize,
    /// Candidates that were hidden or filtered out.
    pub skipped: usize,
    /// Pages the section occupies.
    pub pages: usize,
}

/// Draws directory sections onto a surface.
///
/// Every section starts on a new page; all of them land in one document
/// that the caller finalizes.
pub struct LayoutEngine<'a> {
    pub(crate) surface: &'a mut dyn Surface,
    pub(crate) config: &'a DirectoryConfig,
    pub(crate) resolver: &'a OverrideResolver,
    pub(crate) countries: &'a dyn CountryLookup,
    pub(crate) transliterator: &'a dyn Transliterator,
    pub(crate) now: NaiveDateTime,
    pub(crate) page: Size,
    pub(crate) highlight: Color,
}

impl<'a> LayoutEngine<'a> {
    /// Validates `config` before anything is drawn.
    pub fn new(
        surface: &'a mut dyn Surface,
        config: &'a DirectoryConfig,
        resolver: &'a OverrideResolver,
        countries: &'a dyn CountryLookup,
        transliterator: &'a dyn Transliterator,
        now: NaiveDateTime,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        let page = config.page_dimensions()?;
        let surface_page = surface.page_size();
        if (surface_page.width - page.width).abs() > 0.01
            || (surface_page.height - page.height).abs() > 0.01
        {
            log::warn!(
                "Surface page {:.1}x{:.1} mm differs from configured {} page; using the surface",
                surface_page.width,
                surface_page.height,
                config.page_size
            );
        }
        if !StandardFont::supports_family(&config.font_family) {
            log::warn!(
                "Font family '{}' is not available, using Helvetica",
                config.font_family
            );
        }

        Ok(Self {
            surface,
            config,
            resolver,
            countries,
            transliterator,
            now,
            page: surface_page,
            highlight: Color::highlight(config.highlight_opacity),
        })
    }

    pub fn page_size(&self) -> Size {
        self.page
    }

    pub(crate) fn set_font(&mut self, weight: FontWeight, size: f32) {
        self.surface.set_font(&self.config.font_family, weight, size);
    }

    pub(crate) fn regular(&mut self) {
        self.set_font(FontWeight::Regular, self.config.font_size);
    }

    pub(crate) fn bold(&mut self) {
        self.set_font(FontWeight::Bold, self.config.font_size);
    }

    /// Height of one line of body text, in mm.
    pub(crate) fn font_height(&self) -> f32 {
        self.config.font_size / rollbook_types::PT_PER_MM
    }

    /// Y offset below the top margin that the section header occupies.
    pub(crate) fn header_offset(&self) -> f32 {
        header_offset(self.config.font_size)
    }

    /// Transliterates and draws `text`, shrinking it to `w` if needed.
    pub(crate) fn text(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: &str,
        align: HAlign,
    ) -> Result<(), LayoutError> {
        let text = self.transliterator.transliterate(text);
        if text.is_empty() {
            return Ok(());
        }
        shrink_cell(self.surface, x, y, w, h, &text, align)?;
        Ok(())
    }

    /// Starts a new page with the header text on the left and the render
    /// date on the right.
    pub(crate) fn begin_section(&mut self, header: &str) -> Result<usize, LayoutError> {
        self.surface.add_page();
        let first_page = self.surface.page_count();

        let left = self.config.left_margin;
        let top = self.config.top_margin;
        let width = self.page.width - left - self.config.right_margin;

        self.set_font(FontWeight::Regular, self.config.font_size + 2.0);
        let header_height = (self.config.font_size + 2.0) / rollbook_types::PT_PER_MM;
        self.text(left, top, width, header_height, header, HAlign::Left)?;

        self.regular();
        let stamp = as_of_stamp(self.now.date());
        let line = self.font_height();
        self.text(left, top, width, line, &stamp, HAlign::Right)?;
        Ok(first_page)
    }

    /// Height kept clear at the bottom of each page for the footnote legend.
    pub(crate) fn footer_reserve(&self, section: &Section) -> f32 {
        if section.has_footnotes() {
            self.font_height()
        } else {
            0.0
        }
    }

    /// Draws the enabled footnote legends at the bottom of the current page.
    pub(crate) fn draw_footer(&mut self, section: &Section) -> Result<(), LayoutError> {
        if !section.has_footnotes() {
            return Ok(());
        }
        self.regular();
        let line = self.font_height();
        let left = self.config.left_margin;
        let width = self.page.width - left - self.config.right_margin;
        let y = self.page.height - line - self.config.bottom_margin;

        if section.baptism_footnote {
            self.text(left, y, width, line, BAPTISM_LEGEND, HAlign::Left)?;
        }
        if section.new_member_footnote {
            self.text(left, y, width, line, NEW_MEMBER_LEGEND, HAlign::Right)?;
        }
        Ok(())
    }

    pub(crate) fn finish_stats(&self, first_page: usize, drawn: usize, skipped: usize) -> SectionStats {
        SectionStats {
            drawn,
            skipped,
            pages: self.surface.page_count() + 1 - first_page,
        }
    }
}
