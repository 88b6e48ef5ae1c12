//! The primary directory section: one photo cell per person.

use rollbook_render_core::HAlign;
use rollbook_types::{Household, Person, Rect, Section};

use crate::LayoutError;
use crate::cursor::{Advance, ColumnCursor};
use crate::engine::{LayoutEngine, SectionStats};
use crate::entry::entry_lines;
use crate::frame::PageFrame;
use crate::overrides::OverrideResolver;

/// Which highlight bands a cell gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    /// Household head: a band reaching below the cell toward the members.
    Head,
    Member,
}

/// Households in ascending sort-key order; ties keep input order.
pub(crate) fn sorted_households(households: &[Household]) -> Vec<&Household> {
    let mut ordered: Vec<&Household> = households.iter().collect();
    ordered.sort_by_cached_key(|h| h.sort_key());
    ordered
}

/// People `compose_roster` draws a cell for, applying the same household,
/// exclusion and override checks. Order follows the input.
pub fn roster_people<'h>(
    resolver: &OverrideResolver,
    households: &'h [Household],
    section: &Section,
) -> Vec<&'h Person> {
    let mut people = Vec::new();
    for household in households {
        if let Some(head) = &household.head {
            let options = resolver.resolve(head, section);
            if !options.show_household {
                continue;
            }
            if options.show {
                people.push(head);
            }
        }
        people.extend(
            household
                .members
                .iter()
                .filter(|m| !section.excludes(m) && resolver.resolve(m, section).show),
        );
    }
    people
}

impl LayoutEngine<'_> {
    /// Renders a roster section: households in sort-key order, each head
    /// followed by its members, then the footnote legend on the last page.
    pub fn compose_roster(
        &mut self,
        households: &[Household],
        section: &Section,
    ) -> Result<SectionStats, LayoutError> {
        log::info!(
            "Composing roster section '{}' with {} households",
            section.header,
            households.len()
        );
        let first_page = self.begin_section(&section.header)?;
        let frame = PageFrame::new(
            self.page,
            self.config,
            self.config.number_of_columns,
            self.config.gutter,
        );
        let mut cursor = ColumnCursor::new(
            frame.columns,
            frame.top,
            self.header_offset(),
            frame.bottom_limit(),
        );

        let mut drawn = 0;
        let mut skipped = 0;
        for household in sorted_households(households) {
            if household.is_empty() {
                log::debug!("Skipping household '{}' with no people", household.id);
                continue;
            }

            if let Some(head) = &household.head {
                if !self.resolver.resolve(head, section).show_household {
                    skipped += household.people().count();
                    continue;
                }
                if self.render_entry(head, &mut cursor, &frame, section, Band::Head)? {
                    drawn += 1;
                } else {
                    skipped += 1;
                }
            }

            for member in &household.members {
                if section.excludes(member) {
                    skipped += 1;
                    continue;
                }
                if self.render_entry(member, &mut cursor, &frame, section, Band::Member)? {
                    drawn += 1;
                } else {
                    skipped += 1;
                }
            }
        }

        self.draw_footer(section)?;
        let stats = self.finish_stats(first_page, drawn, skipped);
        log::debug!("Roster section '{}': {:?}", section.header, stats);
        Ok(stats)
    }

    /// Draws one person's cell, breaking column or page first if it would
    /// not fit. Returns `false` when the person is hidden; the cursor is
    /// then left untouched.
    pub(crate) fn render_entry(
        &mut self,
        person: &Person,
        cursor: &mut ColumnCursor,
        frame: &PageFrame,
        section: &Section,
        band: Band,
    ) -> Result<bool, LayoutError> {
        let options = self.resolver.resolve(person, section);
        if !options.show {
            return Ok(false);
        }

        let cell_height = self.config.column_height;
        let padding = self.config.padding;
        let half_padding = padding / 2.0;

        let reserve = self.footer_reserve(section);
        if cursor.place(cell_height + padding, reserve) == Advance::PageBreak {
            self.draw_footer(section)?;
            self.surface.add_page();
        }

        let start_y = cursor.y() + half_padding;
        let x = frame.column_x(cursor.column());
        self.draw_bands(x, start_y, frame, band)?;

        let image_width = self.config.image_width;
        let image_padding = self.config.image_padding;
        if person.thumbnail {
            if self.surface.image_info(&person.id).is_some() {
                self.surface
                    .draw_image(&person.id, x + image_padding, start_y, image_width)?;
            } else {
                log::debug!("No usable thumbnail registered for person '{}'", person.id);
            }
        }

        let text_x = x + image_width + 2.0 * image_padding;
        let text_width = frame.column_width - (image_width + 2.0 * image_padding);
        let line_height = self.config.line_height;

        let mut y = start_y;
        for line in entry_lines(person, &options, self.countries) {
            self.set_font(line.weight, self.config.font_size);
            self.text(text_x, y, text_width, line_height, &line.text, HAlign::Left)?;
            y += line_height;
        }
        self.regular();

        cursor.set_y(start_y + cell_height + half_padding);
        Ok(true)
    }

    /// Light fills behind a cell, clipped to the margins. Every cell gets a
    /// band starting half a padding above it; a head's band additionally
    /// reaches a quarter padding further down.
    fn draw_bands(
        &mut self,
        x: f32,
        start_y: f32,
        frame: &PageFrame,
        band: Band,
    ) -> Result<(), LayoutError> {
        let half_padding = self.config.padding / 2.0;
        let fill_height = self.config.column_height + half_padding + half_padding / 2.0;

        let mut bands = Vec::with_capacity(2);
        if band == Band::Head {
            bands.push(Rect::new(
                x,
                start_y - half_padding / 2.0,
                frame.column_width,
                fill_height,
            ));
        }
        bands.push(Rect::new(
            x,
            start_y - half_padding,
            frame.column_width,
            fill_height,
        ));

        for rect in bands {
            if let Some(clipped) = rect.clamp_vertical(frame.top, frame.bottom_limit()) {
                self.surface.fill_rect(clipped, self.highlight)?;
            }
        }
        Ok(())
    }
}
