//! Configuration System
//!
//! Layered configuration for the service: built-in defaults, then the global file,
//! then the project file, then `PROJTREE_*` environment variables.

use crate::error::ServiceError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod loader;
mod merge;
mod sources;

pub use loader::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::PROJECT_CONFIG_FILE;

/// Which filesystem driver runs the operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// `std::fs`, blocking the calling thread
    #[default]
    Blocking,
    /// `tokio::fs` on a current-thread runtime
    Nonblocking,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjtreeConfig {
    /// Project root (defaults to the current directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub execution: ExecutionMode,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Root(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Root(msg) => write!(f, "Root: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ProjtreeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(root) = &self.root {
            if root.as_os_str().is_empty() {
                errors.push(ValidationError::Root("Root path cannot be empty".to_string()));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and turn the collected errors into a single service error
    pub fn validated(self) -> Result<Self, ServiceError> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => Err(ServiceError::Config(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
        }
    }
}
