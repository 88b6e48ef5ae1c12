//! Parents and their children, with optional age and birthday columns.

use std::cmp::Reverse;

use rollbook_render_core::{FontWeight, HAlign};
use rollbook_types::{Household, Person, Point, Section};

use crate::LayoutError;
use crate::cursor::{Advance, ColumnCursor};
use crate::engine::{LayoutEngine, SectionStats};
use crate::format::{age_label, long_date};
use crate::roster::sorted_households;

pub const PARENTS_HEADING: &str = "Parents/Children";
pub const AGE_HEADING: &str = "Age";
pub const BIRTHDAY_HEADING: &str = "Birthday";

/// Horizontal space kept clear on each side of a column divider.
const COLUMN_INSET: f32 = 3.0;
/// Indent of a child's name under the parent label.
const CHILD_INDENT: f32 = 4.0;
/// Farthest the age column sits from the column's left edge.
const AGE_OFFSET: f32 = 60.0;

/// Horizontal extent of one children column.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnSpan {
    left: f32,
    right: f32,
}

impl ColumnSpan {
    fn width(&self) -> f32 {
        self.right - self.left
    }

    fn age_x(&self) -> f32 {
        self.left + AGE_OFFSET.min(self.width() * 0.6)
    }
}

/// Two columns when ages or birthdays are shown, three otherwise.
pub fn children_columns(section: &Section) -> u32 {
    if section.age || section.birthday { 2 } else { 3 }
}

/// `Last, First` for the head followed by `and First` for members sharing
/// the anchor's surname and `and First Last` for everyone else.
pub fn parent_label<'p>(
    head: Option<&'p Person>,
    members: impl IntoIterator<Item = &'p Person>,
) -> String {
    let mut label = head
        .map(|h| format!("{}, {}", h.last_name, h.display_first_name()))
        .unwrap_or_default();
    let mut surname = head.map(|h| h.last_name.as_str());

    for member in members {
        match surname {
            None => {
                label = format!("{}, {}", member.last_name, member.display_first_name());
                surname = Some(member.last_name.as_str());
            }
            Some(last) if last == member.last_name => {
                label.push_str(" and ");
                label.push_str(member.display_first_name());
            }
            Some(_) => {
                label.push_str(&format!(
                    " and {} {}",
                    member.display_first_name(),
                    member.last_name
                ));
            }
        }
    }
    label
}

/// Children youngest first: descending birthday, then first name. Unknown
/// birthdays go last.
pub fn sorted_children<'h>(children: impl IntoIterator<Item = &'h Person>) -> Vec<&'h Person> {
    let mut sorted: Vec<&Person> = children.into_iter().collect();
    sorted.sort_by_cached_key(|c| Reverse((c.birthday, c.display_first_name().to_string())));
    sorted
}

impl LayoutEngine<'_> {
    /// Renders one block per household with visible children: a rule, the
    /// bold parent label and a row per child.
    pub fn compose_children(
        &mut self,
        households: &[Household],
        section: &Section,
    ) -> Result<SectionStats, LayoutError> {
        log::info!(
            "Composing children section '{}' with {} households",
            section.header,
            households.len()
        );
        let first_page = self.begin_section(&section.header)?;

        let columns = children_columns(section);
        let left = self.config.left_margin;
        let top = self.config.top_margin;
        let content_width = self.page.width - left - self.config.right_margin;
        let column_width = content_width / columns as f32;
        let bottom_limit = self.page.height - self.config.bottom_margin;

        let spacing = section.line_spacing;
        let line = self.font_height();
        let rule = self.surface.line_width();
        let column_header = rule + spacing + line;

        let span = |column: u32| {
            let start = left + column as f32 * column_width;
            ColumnSpan {
                left: start + if column > 0 { COLUMN_INSET } else { 0.0 },
                right: start + column_width
                    - if column + 1 < columns { COLUMN_INSET } else { 0.0 },
            }
        };

        let section_header = self.header_offset();
        let mut cursor =
            ColumnCursor::new(columns, top, section_header + column_header, bottom_limit);
        self.draw_children_header(span(0), top + section_header, section)?;

        let mut drawn = 0;
        let mut skipped = 0;
        for household in sorted_households(households) {
            if household.is_empty() {
                log::debug!("Skipping household '{}' with no people", household.id);
                continue;
            }

            let head_options = household
                .head
                .as_ref()
                .map(|head| (head, self.resolver.resolve(head, section)));
            if let Some((head, options)) = &head_options
                && (section.excludes(head) || !options.show_household || !options.show_children)
            {
                skipped += 1;
                continue;
            }

            let children = sorted_children(
                household
                    .children
                    .values()
                    .filter(|c| self.resolver.resolve(c, section).show),
            );
            if children.is_empty() {
                skipped += 1;
                continue;
            }

            let head = head_options
                .as_ref()
                .filter(|(_, options)| options.show)
                .map(|(head, _)| *head);
            let members = household
                .members
                .iter()
                .filter(|m| self.resolver.resolve(m, section).show);
            let label = parent_label(head, members);

            let block = spacing
                + rule
                + spacing
                + line
                + spacing
                + children.len() as f32 * (line + spacing);
            match cursor.place(block, 0.0) {
                Advance::Within => {}
                Advance::ColumnBreak => {
                    let divider_x = left + cursor.column() as f32 * column_width;
                    self.start_children_column(&cursor, divider_x, span(cursor.column()), section)?;
                }
                Advance::PageBreak => self.surface.add_page(),
            }

            let column = span(cursor.column());
            let mut y = cursor.y() + spacing;
            self.surface
                .line(Point::new(column.left, y), Point::new(column.right, y))?;
            y += spacing;

            self.bold();
            self.text(column.left, y, column.width(), line, &label, HAlign::Left)?;
            self.regular();
            y += line + spacing;

            for child in children {
                self.draw_child(child, column, y, line, section)?;
                y += line + spacing;
            }

            cursor.set_y(y - spacing);
            drawn += 1;
        }

        let stats = self.finish_stats(first_page, drawn, skipped);
        log::debug!("Children section '{}': {:?}", section.header, stats);
        Ok(stats)
    }

    /// Divider to the left of the column just entered, plus its heading on
    /// the section's first page.
    fn start_children_column(
        &mut self,
        cursor: &ColumnCursor,
        divider_x: f32,
        span: ColumnSpan,
        section: &Section,
    ) -> Result<(), LayoutError> {
        let top = self.config.top_margin;
        let header_top = top + self.header_offset();
        let divider_top = if cursor.is_first_page() { header_top } else { top };
        self.surface.line(
            Point::new(divider_x, divider_top),
            Point::new(divider_x, cursor.bottom_limit()),
        )?;

        if cursor.is_first_page() {
            self.draw_children_header(span, header_top, section)?;
        }
        Ok(())
    }

    fn draw_children_header(
        &mut self,
        span: ColumnSpan,
        y: f32,
        section: &Section,
    ) -> Result<(), LayoutError> {
        self.surface
            .line(Point::new(span.left, y), Point::new(span.right, y))?;
        let y = y + self.surface.line_width() + section.line_spacing;
        let line = self.font_height();

        self.bold();
        self.text(span.left, y, span.width(), line, PARENTS_HEADING, HAlign::Left)?;
        match (section.age, section.birthday) {
            (true, true) => {
                let age_x = span.age_x();
                self.text(age_x, y, span.right - age_x, line, AGE_HEADING, HAlign::Left)?;
                self.text(span.left, y, span.width(), line, BIRTHDAY_HEADING, HAlign::Right)?;
            }
            (true, false) => {
                self.text(span.left, y, span.width(), line, AGE_HEADING, HAlign::Right)?;
            }
            (false, true) => {
                self.text(span.left, y, span.width(), line, BIRTHDAY_HEADING, HAlign::Right)?;
            }
            (false, false) => {}
        }
        self.regular();
        Ok(())
    }

    fn draw_child(
        &mut self,
        child: &Person,
        span: ColumnSpan,
        y: f32,
        line: f32,
        section: &Section,
    ) -> Result<(), LayoutError> {
        let name_x = span.left + CHILD_INDENT;
        let name = child.display_first_name();
        self.text(name_x, y, span.right - name_x, line, name, HAlign::Left)?;

        let Some(birthday) = child.birthday else {
            if section.age || section.birthday {
                log::debug!("Child '{}' has no birthday", child.id);
            }
            return Ok(());
        };
        let age = age_label(birthday, self.now);
        let born = long_date(birthday);

        match (section.age, section.birthday) {
            (true, true) => {
                let age_x = span.age_x();
                self.text(age_x, y, span.right - age_x, line, &age, HAlign::Left)?;
                self.text(span.left, y, span.width(), line, &born, HAlign::Right)?;
            }
            (true, false) => {
                self.text(span.left, y, span.width(), line, &age, HAlign::Right)?;
            }
            (false, true) => {
                self.text(span.left, y, span.width(), line, &born, HAlign::Right)?;
            }
            (false, false) => {}
        }
        Ok(())
    }
}
