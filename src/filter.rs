//! Service entry and content-extension predicates.
//!
//! A service entry is tooling or environment metadata (version control, editor
//! settings, dependency manifests, dotfiles) that traversal and purge never touch.
//! Classification looks at the base name only, never at depth or contents.

use std::path::Path;

/// Literal service entry names. Any other name starting with `.` is also a service entry.
pub const SERVICE_NAMES: &[&str] = &[
    ".git",
    ".env",
    ".gitignore",
    ".vscode",
    "node_modules",
    "package.json",
    "package-lock.json",
    "pnpm-lock.yaml",
    "yarn.lock",
];

/// Extensions accepted by [`has_allowed_ext`], lowercase and without the dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "json", "rtf"];

/// True when `name` is a service entry.
///
/// `name` must be a base name; passing a full path classifies the whole string.
pub fn is_service_entry(name: &str) -> bool {
    SERVICE_NAMES.contains(&name) || name.starts_with('.')
}

/// True when the extension of `path`, lowercased, is one of [`ALLOWED_EXTENSIONS`].
///
/// Independent of [`is_service_entry`]; nothing in traversal or purge applies it.
pub fn has_allowed_ext(path: impl AsRef<Path>) -> bool {
    match path.as_ref().extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
