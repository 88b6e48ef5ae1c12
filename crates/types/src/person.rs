//! Roster entities handed to the composer by the data-collection side.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days after joining that a person still counts as a new member.
pub const NEW_MEMBER_DAYS: i64 = 90;

fn default_country() -> String {
    "US".to_string()
}

/// One directory entry. Read-only to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Replaces `first_name` when drawn.
    pub nickname: Option<String>,

    pub birthday: Option<NaiveDate>,
    pub date_joined: Option<NaiveDate>,
    /// Scheduled or past baptism.
    pub baptism_date: Option<NaiveDate>,
    pub married: bool,

    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// ISO 3166 alpha-2 code.
    pub country: String,
    pub email: String,

    /// Phone numbers as raw digits; `0` means none on record.
    pub cell_phone: u64,
    pub home_phone: u64,
    pub work_phone: u64,

    pub occupation: String,
    pub title: String,
    pub employer: String,
    pub school: String,
    pub children1: String,
    pub children2: String,

    /// Set explicitly in the roster, or derived by `derive_status`.
    pub new_member_90: bool,
    /// Set explicitly in the roster, or derived by `derive_status`.
    pub pending_baptism: bool,
    pub thumbnail: bool,

    pub directory_sections: BTreeSet<String>,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            nickname: None,
            birthday: None,
            date_joined: None,
            baptism_date: None,
            married: false,
            address1: String::new(),
            address2: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: default_country(),
            email: String::new(),
            cell_phone: 0,
            home_phone: 0,
            work_phone: 0,
            occupation: String::new(),
            title: String::new(),
            employer: String::new(),
            school: String::new(),
            children1: String::new(),
            children2: String::new(),
            new_member_90: false,
            pending_baptism: false,
            thumbnail: false,
            directory_sections: BTreeSet::new(),
        }
    }
}

impl Person {
    pub fn new(id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn display_first_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nick) if !nick.trim().is_empty() => nick,
            _ => &self.first_name,
        }
    }

    /// True if the person belongs to any of the named directory sections.
    pub fn in_any_section<S: AsRef<str>>(&self, sections: &[S]) -> bool {
        sections
            .iter()
            .any(|s| self.directory_sections.contains(s.as_ref()))
    }

    /// `YYYY-MM-DD` birthday, or an empty string when unknown.
    pub fn birthday_key(&self) -> String {
        self.birthday
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn is_domestic(&self) -> bool {
        matches!(self.country.as_str(), "US" | "CA")
    }

    /// Sets `new_member_90` when the person joined within
    /// [`NEW_MEMBER_DAYS`] of `today`, and `pending_baptism` when the
    /// baptism date is still ahead. Flags already set stay set.
    pub fn derive_status(&mut self, today: NaiveDate) {
        if let Some(joined) = self.date_joined
            && today.signed_duration_since(joined).num_days() <= NEW_MEMBER_DAYS
        {
            self.new_member_90 = true;
        }
        if let Some(baptism) = self.baptism_date
            && baptism > today
        {
            self.pending_baptism = true;
        }
    }
}

/// A head plus members plus dependent children, grouped for layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Household {
    pub id: String,
    pub head: Option<Person>,
    pub members: Vec<Person>,
    pub children: BTreeMap<String, Person>,
}

impl Household {
    /// The person the household is ordered and labelled by: the head,
    /// else the first member.
    pub fn anchor(&self) -> Option<&Person> {
        self.head.as_ref().or_else(|| self.members.first())
    }

    /// `last + displayed first + id` of the anchor person. Empty for an
    /// empty household.
    pub fn sort_key(&self) -> String {
        self.anchor()
            .map(|p| format!("{}{}{}", p.last_name, p.display_first_name(), p.id))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.members.is_empty()
    }

    /// Derives the date-based flags of everyone in the household, children
    /// included.
    pub fn derive_status(&mut self, today: NaiveDate) {
        for person in self
            .head
            .iter_mut()
            .chain(self.members.iter_mut())
            .chain(self.children.values_mut())
        {
            person.derive_status(today);
        }
    }

    /// Head first, then members in order. Children are not included.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.head.iter().chain(self.members.iter())
    }
}
