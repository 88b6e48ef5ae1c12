//! Source of per-person display overrides.

use std::fmt::Debug;

use rollbook_types::{Override, OverrideMap, index_overrides};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Override store I/O error: {0}")]
    Io(String),

    #[error("Override records could not be parsed: {0}")]
    Parse(String),

    #[error("Override store unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

pub trait OverrideStore: Send + Sync + Debug {
    /// Loads the full table. `Ok(None)` means no overrides were ever saved.
    fn load(&self) -> Result<Option<OverrideMap>, StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOverrideStore {
    records: Option<Vec<Override>>,
}

impl InMemoryOverrideStore {
    pub fn new(records: Vec<Override>) -> Self {
        Self {
            records: Some(records),
        }
    }

    /// A store with nothing saved.
    pub fn empty() -> Self {
        Self { records: None }
    }
}

impl OverrideStore for InMemoryOverrideStore {
    fn load(&self) -> Result<Option<OverrideMap>, StoreError> {
        Ok(self.records.clone().map(index_overrides))
    }
}
