//! Project root resolution

use crate::error::TreeError;
use std::path::{Path, PathBuf};

/// Directory a walk or purge is bounded by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// Use `path` as given, without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The process's current working directory
    pub fn current() -> Result<Self, TreeError> {
        std::env::current_dir()
            .map(Self)
            .map_err(|e| TreeError::from_io(Path::new("."), e))
    }

    /// `path` when supplied, otherwise the current working directory
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, TreeError> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::current(),
        }
    }

    /// Canonical absolute form of the root. The root must exist.
    ///
    /// Uses `dunce` so Windows roots do not turn into `\\?\` paths.
    pub fn canonicalize(&self) -> Result<Self, TreeError> {
        dunce::canonicalize(&self.0)
            .map(Self)
            .map_err(|e| TreeError::from_io(&self.0, e))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
