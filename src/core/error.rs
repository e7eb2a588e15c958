// Error Types
// Failures while loading a host document

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document markup: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate element id '{0}'")]
    DuplicateId(String),
}
