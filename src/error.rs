use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for routinist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutinistError {
    #[error("Catalog file not found: {}\n\nPass a catalog path or set [catalog] path in the config.", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog JSON: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RoutinistError {
    fn from(err: std::io::Error) -> Self {
        RoutinistError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
