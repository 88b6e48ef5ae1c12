//! Text content of one roster cell.

use rollbook_render_core::FontWeight;
use rollbook_traits::CountryLookup;
use rollbook_types::{Person, Section};

use crate::format::{month_day, month_year, phone_number};

pub const NEW_MEMBER_MARK: &str = "*";
pub const PENDING_BAPTISM_MARK: &str = "§";

#[derive(Debug, Clone, PartialEq)]
pub struct EntryLine {
    pub text: String,
    pub weight: FontWeight,
}

impl EntryLine {
    fn regular(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Regular,
        }
    }
}

/// Footnote mark appended to the name. Pending baptism wins over new member.
pub fn name_mark(person: &Person, options: &Section) -> &'static str {
    if person.pending_baptism && options.baptism_footnote {
        PENDING_BAPTISM_MARK
    } else if person.new_member_90 && options.new_member_footnote {
        NEW_MEMBER_MARK
    } else {
        ""
    }
}

/// `City, ST 12345` for domestic addresses, `City, Country` otherwise.
/// Empty when no enabled part has a value.
pub fn region_line(person: &Person, options: &Section, countries: &dyn CountryLookup) -> String {
    if person.city.is_empty() && person.state.is_empty() && person.postal_code.is_empty() {
        return String::new();
    }

    let mut text = String::new();
    if options.city && !person.city.is_empty() {
        text.push_str(&person.city);
        text.push_str(", ");
    }

    if person.is_domestic() {
        if options.state && !person.state.is_empty() {
            text.push_str(&person.state);
            text.push(' ');
        }
        if options.postal_code && !person.postal_code.is_empty() {
            let zip = person.postal_code.split('-').next().unwrap_or_default();
            text.push_str(zip);
        }
    } else if options.country && !person.country.is_empty() {
        let name = countries
            .country_name(&person.country)
            .unwrap_or_else(|| person.country.clone());
        text.push_str(&name);
    }

    text.trim_end_matches([',', ' ']).to_string()
}

/// Lines drawn for `person` under `options`, in drawing order. The first
/// line is always the bold name.
pub fn entry_lines(
    person: &Person,
    options: &Section,
    countries: &dyn CountryLookup,
) -> Vec<EntryLine> {
    let mut lines = vec![EntryLine {
        text: format!(
            "{}, {}{}",
            person.last_name.to_uppercase(),
            person.display_first_name().to_uppercase(),
            name_mark(person, options)
        ),
        weight: FontWeight::Bold,
    }];

    for (enabled, value) in [
        (options.occupation, &person.occupation),
        (options.job_title, &person.title),
        (options.employer, &person.employer),
        (options.school, &person.school),
        (options.address, &person.address1),
        (options.address, &person.address2),
    ] {
        if enabled && !value.is_empty() {
            lines.push(EntryLine::regular(value.as_str()));
        }
    }

    let region = region_line(person, options, countries);
    if !region.is_empty() {
        lines.push(EntryLine::regular(region));
    }

    if options.email && !person.email.is_empty() {
        lines.push(EntryLine::regular(person.email.as_str()));
    }

    if options.phones {
        let mut shown = 0u32;
        if person.cell_phone != 0 {
            shown += 1;
            lines.push(EntryLine::regular(format!("C: {}", phone_number(person.cell_phone))));
        }
        for (prefix, phone) in [("H", person.home_phone), ("W", person.work_phone)] {
            if phone != 0 && shown < options.phone_count {
                shown += 1;
                lines.push(EntryLine::regular(format!("{}: {}", prefix, phone_number(phone))));
            }
        }
    }

    let mut dates = Vec::new();
    if options.date_joined
        && let Some(joined) = person.date_joined
    {
        dates.push(format!("DJ: {}", month_year(joined)));
    }
    if options.birthday
        && let Some(birthday) = person.birthday
    {
        dates.push(format!("BD: {}", month_day(birthday)));
    }
    if !dates.is_empty() {
        lines.push(EntryLine::regular(dates.join(" ")));
    }

    if options.children {
        for note in [&person.children1, &person.children2] {
            if !note.is_empty() {
                lines.push(EntryLine::regular(note.as_str()));
            }
        }
    }

    lines
}
