//! Membership directory generation.
//!
//! A `Directory` is configured through `DirectoryBuilder` and renders its
//! roster, children and first-name index sections into a single PDF.

pub mod config;
pub mod directory;
pub mod error;
pub mod store;
pub mod thumbnails;

pub use config::{Roster, config_from_file, config_from_json};
pub use directory::{Directory, DirectoryBuilder, SectionReport, parse_render_date};
pub use error::PipelineError;
pub use store::JsonOverrideStore;

pub use rollbook_layout::{LayoutEngine, OverrideResolver, SectionStats};
pub use rollbook_types::{
    DirectoryConfig, Household, Override, PageSize, Person, Section, SectionKind,
};
