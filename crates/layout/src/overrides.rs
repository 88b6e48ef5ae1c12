//! Merging a section's display flags with per-person overrides.

use rollbook_traits::OverrideStore;
use rollbook_types::{Override, OverrideMap, Person, Section, person_override_key};

/// Applies every `Some(false)` in an override to the matching section flag.
/// `Some(true)` and `None` leave the flag as it was.
macro_rules! narrow_flags {
    ($section:ident, $record:ident; $($flag:ident),+ $(,)?) => {
        $(
            if $record.$flag == Some(false) {
                $section.$flag = false;
            }
        )+
    };
}

/// Resolves the effective display options for one person.
///
/// The table is loaded once by the caller and injected here; resolving
/// never touches the store.
#[derive(Debug, Clone, Default)]
pub struct OverrideResolver {
    overrides: OverrideMap,
}

impl OverrideResolver {
    pub fn new(overrides: OverrideMap) -> Self {
        Self { overrides }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the table from `store`. A failing store is logged and treated
    /// as having no overrides.
    pub fn from_store(store: &dyn OverrideStore) -> Self {
        match store.load() {
            Ok(Some(overrides)) => {
                log::debug!("Loaded {} display overrides", overrides.len());
                Self::new(overrides)
            }
            Ok(None) => {
                log::debug!("No display overrides saved");
                Self::empty()
            }
            Err(e) => {
                log::warn!("Error pulling overrides, continuing without them: {}", e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn lookup(&self, person: &Person) -> Option<&Override> {
        self.overrides.get(&person_override_key(person))
    }

    /// Effective options for `person` under `base`.
    ///
    /// `show_household` and `show_children` start out enabled. A person in
    /// one of the base section's excluded directory sections is hidden no
    /// matter what the override says.
    pub fn resolve(&self, person: &Person, base: &Section) -> Section {
        let mut effective = base.clone();
        effective.show_household = true;
        effective.show_children = true;

        if base.excludes(person) {
            effective.show = false;
            return effective;
        }

        if let Some(record) = self.lookup(person) {
            narrow_flags!(effective, record;
                show,
                show_household,
                show_children,
                job_title,
                employer,
                occupation,
                children,
                school,
                age,
                birthday,
                date_joined,
                address,
                city,
                state,
                postal_code,
                country,
                email,
                phones,
                new_member_footnote,
                baptism_footnote,
            );
        }
        effective
    }
}
