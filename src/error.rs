//! Error types for the project tree service.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem errors surfaced by the mutators, the walker and the purge drivers
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("Directory not empty: {}", .0.display())]
    NotEmpty(PathBuf),

    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Classify an I/O failure on `path` into one of the service error kinds.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound(path),
            io::ErrorKind::PermissionDenied => TreeError::AccessDenied(path),
            io::ErrorKind::DirectoryNotEmpty => TreeError::NotEmpty(path),
            io::ErrorKind::InvalidData => TreeError::InvalidUtf8(path),
            _ => TreeError::Io { path, source: err },
        }
    }

    /// Path the failed operation was acting on
    pub fn path(&self) -> &Path {
        match self {
            TreeError::NotFound(path)
            | TreeError::AccessDenied(path)
            | TreeError::NotEmpty(path)
            | TreeError::InvalidUtf8(path)
            | TreeError::Io { path, .. } => path,
        }
    }
}

/// Errors at the service boundary (CLI, configuration, logging)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ServiceError {
    fn from(err: config::ConfigError) -> Self {
        ServiceError::Config(err.to_string())
    }
}
