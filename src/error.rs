use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JpqError {
    #[error("missing \"file\" parameter in query")]
    MissingSelector,

    #[error("\"file\" parameter requires a value")]
    SelectorNeedsValue,

    #[error("invalid document name: {0}")]
    InvalidDocumentName(String),

    #[error("document not found or unreadable: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
