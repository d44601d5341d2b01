//! Directory listing entries

use crate::filter;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::FileType;

/// Kind of a listed entry.
///
/// Taken from the entry's own file type, so symbolic links are never followed:
/// a link to a directory is a `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// One entry from a single listing of one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Base name of the entry
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn directory(name: impl Into<OsString>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    /// Whether this entry is a service entry. Non-UTF-8 names are classified lossily.
    pub fn is_service(&self) -> bool {
        filter::is_service_entry(&self.name.to_string_lossy())
    }
}
