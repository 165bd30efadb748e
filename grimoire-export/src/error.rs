//! Error types for rendering and writing outputs

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("TSV header has unknown column '{0}'")]
    UnknownColumn(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
