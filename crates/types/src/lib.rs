pub mod color;
pub mod config;
pub mod de;
pub mod geometry;
pub mod person;
pub mod section;

pub use color::Color;
pub use config::{ConfigError, DirectoryConfig};
pub use geometry::{PT_PER_MM, PageSize, Point, Rect, Size};
pub use person::{Household, NEW_MEMBER_DAYS, Person};
pub use section::{
    Override, OverrideMap, Section, SectionKind, index_overrides, override_key,
    person_override_key,
};
