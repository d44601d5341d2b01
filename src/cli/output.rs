//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ServiceError, TreeError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ServiceError) -> String {
    match e {
        ServiceError::Tree(TreeError::NotFound(path)) => {
            format!("error: no such file or directory: {}", path.display())
        }
        ServiceError::Tree(TreeError::AccessDenied(path)) => {
            format!("error: permission denied: {}", path.display())
        }
        other => format!("error: {}", other),
    }
}
