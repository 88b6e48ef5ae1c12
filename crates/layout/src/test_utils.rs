use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rollbook_render_core::RecordingSurface;
use rollbook_traits::{StaticCountryTable, WinAnsiTransliterator};
use rollbook_types::{DirectoryConfig, Household, Override, Person, Section, index_overrides};

use crate::engine::LayoutEngine;
use crate::overrides::OverrideResolver;

/// Render time used by every layout test.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Owns everything a `LayoutEngine` borrows.
pub struct Fixture {
    pub config: DirectoryConfig,
    pub resolver: OverrideResolver,
    pub surface: RecordingSurface,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    pub fn with_config(config: DirectoryConfig) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let page = config.page_dimensions().expect("known page size");
        Self {
            config,
            resolver: OverrideResolver::empty(),
            surface: RecordingSurface::new(page),
        }
    }

    pub fn with_overrides(mut self, records: Vec<Override>) -> Self {
        self.resolver = OverrideResolver::new(index_overrides(records));
        self
    }

    pub fn engine(&mut self) -> LayoutEngine<'_> {
        LayoutEngine::new(
            &mut self.surface,
            &self.config,
            &self.resolver,
            &StaticCountryTable,
            &WinAnsiTransliterator,
            now(),
        )
        .expect("valid config")
    }
}

/// A visible section titled `header` with every field switched off.
pub fn section(header: &str) -> Section {
    Section {
        header: header.to_string(),
        ..Section::visible()
    }
}

pub fn person(id: &str, first: &str, last: &str) -> Person {
    Person::new(id, first, last)
}

pub fn household(id: &str, head: Option<Person>, members: Vec<Person>) -> Household {
    Household {
        id: id.to_string(),
        head,
        members,
        children: BTreeMap::new(),
    }
}

pub fn with_children(mut household: Household, children: Vec<Person>) -> Household {
    household.children = children.into_iter().map(|c| (c.id.clone(), c)).collect();
    household
}

pub fn child(id: &str, first: &str, last: &str, birthday: NaiveDate) -> Person {
    Person {
        birthday: Some(birthday),
        ..Person::new(id, first, last)
    }
}

/// The Smith household (head John, member Jane, no children) and the Doe
/// household (no head, member Jan, children Amy and Ben).
pub fn smith_and_doe() -> Vec<Household> {
    let mut john = person("p1", "John", "Smith");
    john.address1 = "1 Main St".into();
    john.city = "Springfield".into();
    john.state = "IL".into();
    john.postal_code = "62701-1234".into();
    john.cell_phone = 2175550100;
    john.home_phone = 2175550101;
    john.birthday = Some(date(1980, 3, 4));

    let jane = person("p2", "Jane", "Smith");
    let jan = person("p3", "Jan", "Doe");

    vec![
        household("h1", Some(john), vec![jane]),
        with_children(
            household("h2", None, vec![jan]),
            vec![
                child("c1", "Amy", "Doe", date(2022, 6, 1)),
                child("c2", "Ben", "Doe", date(2024, 3, 10)),
            ],
        ),
    ]
}

/// `count` single-person households named `Person000`, `Person001`, ...
pub fn many_households(count: usize) -> Vec<Household> {
    (0..count)
        .map(|i| {
            let name = format!("Person{:03}", i);
            household(&format!("h{}", i), Some(person(&format!("p{}", i), "Pat", &name)), Vec::new())
        })
        .collect()
}
