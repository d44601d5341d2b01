//! Best-effort purge bookkeeping
//!
//! Every removal the purge attempts is recorded as a [`Removal`]. A failed removal
//! is an expected outcome (most often a directory kept alive by a service entry),
//! so it is reported as [`Outcome::Skipped`] instead of aborting the walk.

use crate::tree::entry::EntryKind;
use serde::Serialize;
use std::io;
use std::path::PathBuf;

/// Why a removal did not happen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Directory still holds entries, typically service entries
    NotEmpty,
    AccessDenied,
    /// Entry disappeared before it could be removed
    Missing,
    Other(String),
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::DirectoryNotEmpty => SkipReason::NotEmpty,
            io::ErrorKind::PermissionDenied => SkipReason::AccessDenied,
            io::ErrorKind::NotFound => SkipReason::Missing,
            _ => SkipReason::Other(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Removed,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn from_result(result: io::Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Removed,
            Err(err) => Outcome::Skipped(err.into()),
        }
    }
}

/// One attempted removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

/// Ordered record of a purge, in the order removals were attempted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    pub removals: Vec<Removal>,
}

impl PurgeReport {
    pub fn record(&mut self, path: PathBuf, kind: EntryKind, outcome: Outcome) {
        self.removals.push(Removal {
            path,
            kind,
            outcome,
        });
    }

    pub fn removed(&self) -> impl Iterator<Item = &Removal> {
        self.removals
            .iter()
            .filter(|r| r.outcome == Outcome::Removed)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Removal> {
        self.removals
            .iter()
            .filter(|r| r.outcome != Outcome::Removed)
    }

    pub fn removed_count(&self) -> usize {
        self.removed().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }
}
