use rollbook_layout::LayoutError;
use rollbook_render_core::RenderError;
use rollbook_types::ConfigError;
use thiserror::Error;

/// Everything that can stop a directory from being produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Section '{section}' uses list '{list}', which is not in the roster")]
    MissingList { section: String, list: String },

    #[error("Invalid render date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
