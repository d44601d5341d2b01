//! Depth-first traversal of a project root
//!
//! [`Traversal`] performs no I/O. It asks for directory listings with
//! [`Action::ReadDir`], and the driver answers with [`Traversal::supply_listing`].
//! Service entries are skipped entirely; every other directory is descended into
//! before its next sibling is considered.

use crate::tree::entry::{DirectoryEntry, EntryKind};
use std::path::{Path, PathBuf};
use std::vec;

/// Next step the driver must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List this directory and hand the entries to [`Traversal::supply_listing`]
    ReadDir(PathBuf),
    /// A non-service file (or symlink) reached during the walk
    File(PathBuf),
    /// Every entry below this non-service directory has been processed.
    /// Never emitted for the root.
    LeaveDir(PathBuf),
}

/// A directory being walked and the entries not yet visited
#[derive(Debug)]
struct Frame {
    dir: PathBuf,
    remaining: vec::IntoIter<DirectoryEntry>,
}

/// Explicit-stack pre-order walk.
///
/// Each call to [`next_action`](Traversal::next_action) advances the walk by one
/// step. A fresh traversal re-walks whatever the filesystem holds at that point.
#[derive(Debug)]
pub struct Traversal {
    stack: Vec<Frame>,
    /// Directory whose listing was requested but not yet supplied
    awaiting: Option<PathBuf>,
    /// Directory to request next
    pending: Option<PathBuf>,
}

impl Traversal {
    /// Start a walk rooted at `root`. The root is listed but never reported.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            stack: Vec::new(),
            awaiting: None,
            pending: Some(root.as_ref().to_path_buf()),
        }
    }

    /// Current depth below the root (0 while processing the root's entries)
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Advance the walk. Returns `None` once the root is exhausted.
    ///
    /// After an [`Action::ReadDir`] the driver must call
    /// [`supply_listing`](Traversal::supply_listing) before calling this again;
    /// otherwise the unanswered directory is treated as empty.
    pub fn next_action(&mut self) -> Option<Action> {
        self.awaiting = None;

        if let Some(dir) = self.pending.take() {
            self.awaiting = Some(dir.clone());
            return Some(Action::ReadDir(dir));
        }

        loop {
            let frame = self.stack.last_mut()?;
            match frame.remaining.next() {
                Some(entry) => {
                    if entry.is_service() {
                        continue;
                    }
                    let path = frame.dir.join(&entry.name);
                    match entry.kind {
                        EntryKind::Directory => {
                            self.awaiting = Some(path.clone());
                            return Some(Action::ReadDir(path));
                        }
                        EntryKind::File => return Some(Action::File(path)),
                    }
                }
                None => {
                    let finished = self.stack.pop()?;
                    if !self.stack.is_empty() {
                        return Some(Action::LeaveDir(finished.dir));
                    }
                }
            }
        }
    }

    /// Answer the last [`Action::ReadDir`] with the entries of that directory,
    /// in the order the storage returned them.
    pub fn supply_listing(&mut self, entries: Vec<DirectoryEntry>) {
        if let Some(dir) = self.awaiting.take() {
            self.stack.push(Frame {
                dir,
                remaining: entries.into_iter(),
            });
        }
    }
}
