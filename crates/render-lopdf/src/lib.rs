//! PDF output for directory composition using lopdf.
//!
//! Pages are buffered as content operations while the layout engine draws;
//! the object graph is assembled once in `finish`.

mod content;
mod surface;

pub use surface::LopdfSurface;
