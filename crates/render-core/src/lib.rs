//! Core rendering abstractions for directory composition.
//!
//! This crate provides what every backend shares:
//! - the `Surface` trait the layout engine draws through
//! - `RenderError`
//! - metrics for the standard Helvetica faces
//! - `RecordingSurface`, a backend that records draw calls instead of producing bytes

mod error;
pub mod metrics;
mod recording;
mod surface;
pub mod utils;

pub use error::RenderError;
pub use metrics::StandardFont;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{EncodedImage, FontWeight, HAlign, ImageInfo, Surface};
