//! CLI parse: clap types for projtree. No behavior; definitions only.

use crate::config::ExecutionMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Projtree CLI - filtered traversal and bulk mutation of project trees
#[derive(Parser)]
#[command(name = "projtree")]
#[command(about = "List, transform and purge project files while leaving service entries alone")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Execution variant for filesystem operations
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ExecutionMode>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Relative paths given to file commands are resolved against the project root.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every non-service file under the root, depth-first
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Remove all non-service content under the root
    Purge {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print a file's content
    Read { path: PathBuf },
    /// Write a file, creating missing parent directories
    Write { path: PathBuf, content: String },
    /// Replace the content of an existing file
    Overwrite { path: PathBuf, content: String },
    /// Truncate a file to zero length
    Clear { path: PathBuf },
    /// Strip digits and lowercase a file in place
    Denoise { path: PathBuf },
    /// Copy a file, creating missing parent directories of the destination
    Copy { src: PathBuf, dest: PathBuf },
    /// Create a directory and its parents
    Mkdir { path: PathBuf },
    /// Delete a directory recursively, service entries included
    Rmdir { path: PathBuf },
    /// Report whether each path has an allowed content extension (.txt, .json, .rtf)
    CheckExt {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Report whether each name is a service entry
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Exercise every operation on a scratch `demo/` directory under the root
    Demo {
        /// Leave the emptied demo directory in place
        #[arg(long)]
        keep: bool,
    },
}
