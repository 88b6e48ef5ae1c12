use rollbook_render_core::RenderError;
use rollbook_types::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

pub mod algorithms;
pub mod cursor;
pub mod entry;
pub mod fit;
pub mod format;
pub mod frame;
pub mod overrides;

mod children;
mod engine;
mod index;
mod roster;

pub use self::cursor::{Advance, ColumnCursor};
pub use self::engine::{LayoutEngine, SectionStats};
pub use self::entry::{EntryLine, entry_lines};
pub use self::frame::PageFrame;
pub use self::overrides::OverrideResolver;
pub use self::roster::roster_people;

#[cfg(test)]
mod test_utils;
