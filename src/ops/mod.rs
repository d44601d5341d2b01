//! Filesystem operations over a project tree
//!
//! Two execution variants with the same observable behavior:
//!
//! - [`blocking`]: every call blocks the current thread on `std::fs`.
//! - [`nonblocking`]: every call is an `async fn` over `tokio::fs`; each filesystem
//!   call is a suspension point, but the walk stays sequential within a directory.
//!
//! Both drive the same [`Traversal`](crate::tree::Traversal) for
//! `list_project_files` and `purge_project`, so listing order and purge end state
//! cannot diverge between them.

pub mod blocking;
pub mod nonblocking;
