//! Alphabetical first-name index.

use std::collections::BTreeMap;

use rollbook_render_core::HAlign;
use rollbook_types::{Household, Person, Section};

use crate::LayoutError;
use crate::cursor::{Advance, ColumnCursor};
use crate::engine::{LayoutEngine, SectionStats};
use crate::frame::PageFrame;

/// Heads and members of every listed household keyed by `first+last`.
/// A later person with the same key replaces the earlier one.
pub(crate) fn index_entries<'h>(
    households: impl IntoIterator<Item = &'h Household>,
    mut household_listed: impl FnMut(&Person) -> bool,
) -> BTreeMap<String, &'h Person> {
    let mut entries = BTreeMap::new();
    for household in households {
        if let Some(head) = &household.head
            && !household_listed(head)
        {
            continue;
        }
        for person in household.people() {
            let key = format!("{}{}", person.display_first_name(), person.last_name);
            entries.insert(key, person);
        }
    }
    entries
}

impl LayoutEngine<'_> {
    /// Renders one `First Last` line per listed adult, sorted by first name,
    /// across `section.columns` columns (the configured index column count
    /// when unset).
    pub fn compose_index(
        &mut self,
        households: &[Household],
        section: &Section,
    ) -> Result<SectionStats, LayoutError> {
        log::info!(
            "Composing index section '{}' with {} households",
            section.header,
            households.len()
        );
        let first_page = self.begin_section(&section.header)?;

        let columns = if section.columns > 0 {
            section.columns
        } else {
            self.config.index_columns
        };
        let frame = PageFrame::new(self.page, self.config, columns, 0.0);
        let mut cursor = ColumnCursor::new(
            frame.columns,
            frame.top,
            self.header_offset(),
            frame.bottom_limit(),
        );

        let resolver = self.resolver;
        let entries = index_entries(households, |head| {
            resolver.resolve(head, section).show_household
        });
        log::debug!("Index has {} distinct names", entries.len());

        let line_height = self.config.line_height;
        let mut drawn = 0;
        let mut skipped = 0;
        self.regular();
        for person in entries.values() {
            if !self.resolver.resolve(person, section).show {
                skipped += 1;
                continue;
            }

            if cursor.place(line_height, 0.0) == Advance::PageBreak {
                self.surface.add_page();
            }

            let name = format!("{} {}", person.display_first_name(), person.last_name);
            self.text(
                frame.column_x(cursor.column()),
                cursor.y(),
                frame.column_width,
                line_height,
                &name,
                HAlign::Left,
            )?;
            cursor.advance(line_height);
            drawn += 1;
        }

        let stats = self.finish_stats(first_page, drawn, skipped);
        log::debug!("Index section '{}': {:?}", section.header, stats);
        Ok(stats)
    }
}
