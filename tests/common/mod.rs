pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use rollbook::{Directory, DirectoryBuilder, PipelineError, Roster, parse_render_date};
use rollbook::DirectoryConfig;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page, 1-based
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Builder with the fixed render date used across the integration tests
pub fn builder(config: DirectoryConfig, roster: Roster) -> Result<DirectoryBuilder, PipelineError> {
    let _ = env_logger::builder().is_test(true).try_init();
    Ok(DirectoryBuilder::new()
        .with_config(config)
        .with_roster(roster)
        .with_render_time(parse_render_date("2024-06-15")?))
}

/// Render a built directory and load the result back
pub fn render(directory: &Directory) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(directory.generate()?)
}
