//! Error types for catalog construction and loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    /// The catalog holds no recipes, so no query could ever return anything.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to read catalog file {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MatcherError>;
