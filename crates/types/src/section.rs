//! Section display configuration and per-person overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::de::{flexible_f32, flexible_u32};
use crate::person::Person;

/// Which composer draws a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Roster,
    Children,
    Index,
}

impl SectionKind {
    /// Kind implied by a section's position when none is given.
    pub fn for_position(position: usize) -> Self {
        match position {
            3 => SectionKind::Children,
            8 => SectionKind::Index,
            _ => SectionKind::Roster,
        }
    }
}

/// A named bundle of display toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub kind: Option<SectionKind>,
    pub show: bool,
    pub header: String,
    pub list_name: String,
    pub exclude_dir_sections: Vec<String>,
    #[serde(deserialize_with = "flexible_u32")]
    pub phone_count: u32,

    pub job_title: bool,
    pub employer: bool,
    pub occupation: bool,
    pub children: bool,
    pub school: bool,
    pub age: bool,
    pub birthday: bool,
    pub date_joined: bool,
    pub address: bool,
    pub city: bool,
    pub state: bool,
    pub postal_code: bool,
    pub country: bool,
    pub email: bool,
    pub phones: bool,
    pub new_member_footnote: bool,
    pub baptism_footnote: bool,
    pub show_household: bool,
    pub show_children: bool,

    /// Vertical gap in mm between rows of the children listing.
    #[serde(deserialize_with = "flexible_f32")]
    pub line_spacing: f32,
    /// Column count for the index; `0` uses the document default.
    #[serde(deserialize_with = "flexible_u32")]
    pub columns: u32,
}

impl Section {
    /// A section that shows everything it is asked about and nothing else.
    pub fn visible() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    pub fn kind_at(&self, position: usize) -> SectionKind {
        self.kind.unwrap_or_else(|| SectionKind::for_position(position))
    }

    pub fn has_footnotes(&self) -> bool {
        self.new_member_footnote || self.baptism_footnote
    }

    pub fn excludes(&self, person: &Person) -> bool {
        person.in_any_section(&self.exclude_dir_sections)
    }
}

/// A per-person narrowing delta. `None` means no opinion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Override {
    pub key_first_name: String,
    pub key_last_name: String,
    /// `YYYY-MM-DD`, empty when the birthday is unknown.
    pub key_birthday: String,

    pub show: Option<bool>,
    pub show_household: Option<bool>,
    pub show_children: Option<bool>,
    pub job_title: Option<bool>,
    pub employer: Option<bool>,
    pub occupation: Option<bool>,
    pub children: Option<bool>,
    pub school: Option<bool>,
    pub age: Option<bool>,
    pub birthday: Option<bool>,
    pub date_joined: Option<bool>,
    pub address: Option<bool>,
    pub city: Option<bool>,
    pub state: Option<bool>,
    pub postal_code: Option<bool>,
    pub country: Option<bool>,
    pub email: Option<bool>,
    pub phones: Option<bool>,
    pub new_member_footnote: Option<bool>,
    pub baptism_footnote: Option<bool>,
}

impl Override {
    pub fn key(&self) -> String {
        override_key(&self.key_first_name, &self.key_last_name, &self.key_birthday)
    }
}

/// Normalized lookup key `lower(first)-lower(last)-birthday`.
pub fn override_key(first_name: &str, last_name: &str, birthday: &str) -> String {
    format!("{}-{}-{}", first_name, last_name, birthday).to_lowercase()
}

/// Key under which a person's override is filed.
pub fn person_override_key(person: &Person) -> String {
    override_key(person.display_first_name(), &person.last_name, &person.birthday_key())
}

pub type OverrideMap = HashMap<String, Override>;

/// Files records under their normalized key. Later records replace earlier ones.
pub fn index_overrides(records: impl IntoIterator<Item = Override>) -> OverrideMap {
    records.into_iter().map(|o| (o.key(), o)).collect()
}
