use std::path::PathBuf;

use serde_json::Value;

use crate::error::JpqError;

/// Resolves and loads JSON documents from a base directory.
///
/// Documents are addressed by bare name: `load("sample")` reads
/// `<base>/sample.json`. Names never escape the base directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    base: PathBuf,
}

impl DocumentStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        DocumentStore { base: base.into() }
    }

    /// Compute the on-disk path for a document name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, JpqError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(JpqError::InvalidDocumentName(name.to_string()));
        }
        Ok(self.base.join(format!("{name}.json")))
    }

    /// Read and parse a document.
    pub fn load(&self, name: &str) -> Result<Value, JpqError> {
        let path = self.resolve(name)?;
        let text = std::fs::read_to_string(&path)
            .map_err(|_| JpqError::DocumentNotFound { path: path.clone() })?;
        serde_json::from_str(&text).map_err(|e| JpqError::Parse(e.to_string()))
    }
}
