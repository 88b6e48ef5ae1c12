//! Loading the directory configuration and the household roster.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use rollbook_types::{DirectoryConfig, Household};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Household lists keyed by list name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub lists: BTreeMap<String, Vec<Household>>,
}

impl Roster {
    /// A roster holding one list.
    pub fn single(name: impl Into<String>, households: Vec<Household>) -> Self {
        let mut lists = BTreeMap::new();
        lists.insert(name.into(), households);
        Self { lists }
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        Self::from_json(&read_file(path.as_ref(), "roster")?)
    }

    pub fn list(&self, name: &str) -> Option<&[Household]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    /// Derives the new-member and pending-baptism flags against `today`.
    pub fn derive_status(&mut self, today: NaiveDate) {
        for household in self.lists.values_mut().flatten() {
            household.derive_status(today);
        }
    }

    /// Total households across every list.
    pub fn household_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}

pub fn config_from_json(json: &str) -> Result<DirectoryConfig, PipelineError> {
    Ok(serde_json::from_str(json)?)
}

pub fn config_from_file(path: impl AsRef<Path>) -> Result<DirectoryConfig, PipelineError> {
    config_from_json(&read_file(path.as_ref(), "configuration")?)
}

fn read_file(path: &Path, what: &str) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {} from '{}': {}", what, path.display(), e),
        ))
    })
}
