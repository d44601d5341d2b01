//! CLI route: single route table and run context. Dispatches to the selected
//! execution variant and to presentation.

use crate::cli::demo;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_file_list, format_flags, format_purge_report};
use crate::config::{ConfigLoader, ExecutionMode};
use crate::error::ServiceError;
use crate::filter;
use crate::ops::{blocking, nonblocking};
use crate::tree::{ProjectRoot, PurgeReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of one command, before rendering
enum Response {
    Files(Vec<PathBuf>),
    Purged(PurgeReport),
    Content(String),
    Message(String),
    Flags {
        rows: Vec<(String, bool)>,
        yes: &'static str,
        no: &'static str,
    },
}

impl Response {
    fn render(self, format: &str) -> Result<String, ServiceError> {
        match self {
            Response::Files(files) => format_file_list(&files, format),
            Response::Purged(report) => format_purge_report(&report, format),
            Response::Content(content) | Response::Message(content) => Ok(content),
            Response::Flags { rows, yes, no } => Ok(format_flags(&rows, yes, no)),
        }
    }
}

/// Stable command name for logs and errors
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Purge { .. } => "purge",
        Commands::Read { .. } => "read",
        Commands::Write { .. } => "write",
        Commands::Overwrite { .. } => "overwrite",
        Commands::Clear { .. } => "clear",
        Commands::Denoise { .. } => "denoise",
        Commands::Copy { .. } => "copy",
        Commands::Mkdir { .. } => "mkdir",
        Commands::Rmdir { .. } => "rmdir",
        Commands::CheckExt { .. } => "check-ext",
        Commands::Classify { .. } => "classify",
        Commands::Demo { .. } => "demo",
    }
}

fn output_format(command: &Commands) -> &str {
    match command {
        Commands::List { format } | Commands::Purge { format } => format.as_str(),
        _ => "text",
    }
}

fn not_a_filesystem_command(command: &Commands) -> ServiceError {
    ServiceError::InvalidArgument(format!(
        "`{}` has no filesystem variant",
        command_name(command)
    ))
}

/// Single-threaded cooperative scheduler for the non-blocking variant
pub(crate) fn current_thread_runtime() -> Result<tokio::runtime::Runtime, ServiceError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ServiceError::Config(format!("Failed to start async runtime: {}", e)))
}

/// Runtime context for CLI execution: project root and execution variant.
pub struct RunContext {
    root: ProjectRoot,
    mode: ExecutionMode,
}

impl RunContext {
    /// Build from CLI values, filling gaps from configuration.
    ///
    /// An explicit `root` or `mode` wins over the configured one. The chosen
    /// root must exist and is made absolute, so listings report absolute paths.
    pub fn new(
        root: Option<PathBuf>,
        config_path: Option<PathBuf>,
        mode: Option<ExecutionMode>,
    ) -> Result<Self, ServiceError> {
        let lookup_root = ProjectRoot::resolve(root.clone())?;
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(lookup_root.as_path())?,
        };

        let root = match root {
            Some(root) => ProjectRoot::new(root),
            None => ProjectRoot::resolve(config.root)?,
        }
        .canonicalize()?;
        let mode = mode.unwrap_or(config.execution);
        debug!(root = %root.as_path().display(), ?mode, "Run context ready");
        Ok(Self { root, mode })
    }

    pub fn with_root(root: ProjectRoot, mode: ExecutionMode) -> Self {
        Self { root, mode }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.as_path().join(path)
        }
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ServiceError> {
        info!(command = command_name(command), mode = ?self.mode, "Running command");
        let response = match command {
            Commands::CheckExt { paths } => Response::Flags {
                rows: paths
                    .iter()
                    .map(|p| (p.display().to_string(), filter::has_allowed_ext(p)))
                    .collect(),
                yes: "allowed",
                no: "not allowed",
            },
            Commands::Classify { names } => Response::Flags {
                rows: names
                    .iter()
                    .map(|n| (n.clone(), filter::is_service_entry(n)))
                    .collect(),
                yes: "service",
                no: "regular",
            },
            Commands::Demo { keep } => Response::Message(demo::run(self.root.as_path(), *keep)?),
            _ => match self.mode {
                ExecutionMode::Blocking => self.dispatch_blocking(command)?,
                ExecutionMode::Nonblocking => {
                    current_thread_runtime()?.block_on(self.dispatch_nonblocking(command))?
                }
            },
        };
        response.render(output_format(command))
    }

    fn dispatch_blocking(&self, command: &Commands) -> Result<Response, ServiceError> {
        let response = match command {
            Commands::List { .. } => Response::Files(blocking::list_project_files(&self.root)?),
            Commands::Purge { .. } => Response::Purged(blocking::purge_project(&self.root)?),
            Commands::Read { path } => Response::Content(blocking::read_file(self.resolve(path))?),
            Commands::Write { path, content } => {
                let path = self.resolve(path);
                blocking::write_file(&path, content)?;
                Response::Message(format!("Wrote {}", path.display()))
            }
            Commands::Overwrite { path, content } => {
                let path = self.resolve(path);
                blocking::overwrite_file(&path, content)?;
                Response::Message(format!("Overwrote {}", path.display()))
            }
            Commands::Clear { path } => {
                let path = self.resolve(path);
                blocking::clear_file(&path)?;
                Response::Message(format!("Cleared {}", path.display()))
            }
            Commands::Denoise { path } => {
                Response::Content(blocking::denoise_file(self.resolve(path))?)
            }
            Commands::Copy { src, dest } => {
                let (src, dest) = (self.resolve(src), self.resolve(dest));
                let bytes = blocking::copy_file(&src, &dest)?;
                Response::Message(format!("Copied {} bytes to {}", bytes, dest.display()))
            }
            Commands::Mkdir { path } => {
                let path = self.resolve(path);
                blocking::create_dir(&path)?;
                Response::Message(format!("Created {}", path.display()))
            }
            Commands::Rmdir { path } => {
                let path = self.resolve(path);
                blocking::delete_dir(&path)?;
                Response::Message(format!("Deleted {}", path.display()))
            }
            Commands::CheckExt { .. } | Commands::Classify { .. } | Commands::Demo { .. } => {
                return Err(not_a_filesystem_command(command))
            }
        };
        Ok(response)
    }

    async fn dispatch_nonblocking(&self, command: &Commands) -> Result<Response, ServiceError> {
        let response = match command {
            Commands::List { .. } => {
                Response::Files(nonblocking::list_project_files(&self.root).await?)
            }
            Commands::Purge { .. } => {
                Response::Purged(nonblocking::purge_project(&self.root).await?)
            }
            Commands::Read { path } => {
                Response::Content(nonblocking::read_file(self.resolve(path)).await?)
            }
            Commands::Write { path, content } => {
                let path = self.resolve(path);
                nonblocking::write_file(&path, content).await?;
                Response::Message(format!("Wrote {}", path.display()))
            }
            Commands::Overwrite { path, content } => {
                let path = self.resolve(path);
                nonblocking::overwrite_file(&path, content).await?;
                Response::Message(format!("Overwrote {}", path.display()))
            }
            Commands::Clear { path } => {
                let path = self.resolve(path);
                nonblocking::clear_file(&path).await?;
                Response::Message(format!("Cleared {}", path.display()))
            }
            Commands::Denoise { path } => {
                Response::Content(nonblocking::denoise_file(self.resolve(path)).await?)
            }
            Commands::Copy { src, dest } => {
                let (src, dest) = (self.resolve(src), self.resolve(dest));
                let bytes = nonblocking::copy_file(&src, &dest).await?;
                Response::Message(format!("Copied {} bytes to {}", bytes, dest.display()))
            }
            Commands::Mkdir { path } => {
                let path = self.resolve(path);
                nonblocking::create_dir(&path).await?;
                Response::Message(format!("Created {}", path.display()))
            }
            Commands::Rmdir { path } => {
                let path = self.resolve(path);
                nonblocking::delete_dir(&path).await?;
                Response::Message(format!("Deleted {}", path.display()))
            }
            Commands::CheckExt { .. } | Commands::Classify { .. } | Commands::Demo { .. } => {
                return Err(not_a_filesystem_command(command))
            }
        };
        Ok(response)
    }
}
