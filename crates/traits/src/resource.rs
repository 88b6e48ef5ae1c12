//! Byte sources for person thumbnails.
//!
//! The composer never reads image files itself; the driver asks a
//! `ResourceProvider` for `<person id>.jpg` and hands decoded results to the
//! surface.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

pub type SharedResourceData = Arc<Vec<u8>>;

pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Human-readable name for log lines.
    fn name(&self) -> &'static str;
}

/// Pre-populated images, used by tests and embedders.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

/// Reads resources from files below a base directory.
#[derive(Debug, Clone)]
pub struct DirectoryResourceProvider {
    base: PathBuf,
}

impl DirectoryResourceProvider {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ResourceError::LoadFailed {
                path: path.to_string(),
                message: "path escapes the resource directory".to_string(),
            });
        }
        Ok(self.base.join(relative))
    }
}

impl ResourceProvider for DirectoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full = self.resolve(path)?;
        match std::fs::read(&full) {
            Ok(bytes) => Ok(Arc::new(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "DirectoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("42.jpg", b"jpeg bytes".to_vec()).unwrap();

        let data = provider.load("42.jpg").unwrap();
        assert_eq!(&*data, b"jpeg bytes");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        assert!(provider.is_empty());
        assert!(matches!(provider.load("7.jpg"), Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_directory_provider_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9.jpg"), b"abc").unwrap();

        let provider = DirectoryResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("9.jpg").unwrap(), b"abc");
        assert!(matches!(provider.load("10.jpg"), Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_directory_provider_rejects_parent_paths() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryResourceProvider::new(dir.path());
        assert!(matches!(
            provider.load("../secret.jpg"),
            Err(ResourceError::LoadFailed { .. })
        ));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ResourceError = io_err.into();
        assert!(matches!(err, ResourceError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
