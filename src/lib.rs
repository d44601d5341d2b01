//! Projtree: filtered project tree service
//!
//! Walks a project directory while skipping service entries (version control,
//! editor settings, dependency manifests, dotfiles) and offers whole-file read,
//! write and transform operations plus a best-effort purge, in a blocking and a
//! non-blocking variant with identical behavior.

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod ops;
pub mod text;
pub mod tree;
