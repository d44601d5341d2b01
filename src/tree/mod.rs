//! Project tree traversal
//!
//! The depth-first walk over a project root is expressed once, as a state machine
//! that emits actions ([`walker::Traversal`]). The blocking and non-blocking drivers
//! in [`crate::ops`] perform those actions against the real filesystem.

pub mod entry;
pub mod path;
pub mod purge;
pub mod walker;

pub use entry::{DirectoryEntry, EntryKind};
pub use path::ProjectRoot;
pub use purge::{Outcome, PurgeReport, Removal, SkipReason};
pub use walker::{Action, Traversal};
