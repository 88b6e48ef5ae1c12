//! File-backed override store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use rollbook_traits::{OverrideStore, StoreError};
use rollbook_types::{Override, OverrideMap, index_overrides};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct OverrideFile {
    overrides: Vec<Override>,
}

/// Reads `{"overrides": [...]}` from a JSON file. A missing file means no
/// overrides were ever saved.
#[derive(Debug, Clone)]
pub struct JsonOverrideStore {
    path: PathBuf,
}

impl JsonOverrideStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes `records` in the format `load` reads.
    pub fn save(&self, records: &[Override]) -> Result<(), StoreError> {
        let file = OverrideFile {
            overrides: records.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|e| StoreError::Parse(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl OverrideStore for JsonOverrideStore {
    fn load(&self) -> Result<Option<OverrideMap>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No override file at '{}'", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let file: OverrideFile = serde_json::from_str(&json)
            .map_err(|e| StoreError::Parse(format!("{}: {}", self.path.display(), e)))?;
        log::debug!(
            "Loaded {} override records from '{}'",
            file.overrides.len(),
            self.path.display()
        );
        Ok(Some(index_overrides(file.overrides)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_no_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonOverrideStore::new(dir.path().join("overrides.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonOverrideStore::new(dir.path().join("overrides.json"));
        store
            .save(&[Override {
                key_first_name: "Jane".into(),
                key_last_name: "Smith".into(),
                email: Some(false),
                ..Override::default()
            }])
            .unwrap();

        let map = store.load().unwrap().unwrap();
        assert_eq!(map["jane-smith-"].email, Some(false));
        assert_eq!(map["jane-smith-"].phones, None);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonOverrideStore::new(path).load(),
            Err(StoreError::Parse(_))
        ));
    }
}
