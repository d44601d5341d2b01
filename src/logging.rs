//! Logging System
//!
//! Structured logging through `tracing`. Level, format and destination come from
//! the configuration file, CLI flags, or `PROJTREE_LOG*` environment variables.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on a terminal stream only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

// Command output goes to stdout; keep log lines out of it.
fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: true,
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {} (must be one of {})",
                self.level,
                LEVELS.join(", ")
            ));
        }
        if self.format != "json" && self.format != "text" {
            return Err(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.format
            ));
        }
        let output = parse_output(&self.output)?;
        if output == Output::File && self.file.is_none() {
            return Err("Log output 'file' requires logging.file".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

fn parse_output(output: &str) -> Result<Output, String> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        _ => Err(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        )),
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (PROJTREE_LOG, PROJTREE_LOG_FORMAT, PROJTREE_LOG_OUTPUT)
/// 2. The given config (CLI flags are folded into it by the caller)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ServiceError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let writer = match output {
        Output::Stdout => BoxMakeWriter::new(std::io::stdout),
        Output::Stderr => BoxMakeWriter::new(std::io::stderr),
        Output::File => BoxMakeWriter::new(Mutex::new(open_log_file(config)?)),
    };
    let use_color = config.color && output != Output::File;

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ServiceError::Config(format!("Failed to install logger: {}", e)))
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, ServiceError> {
    let log_file = config
        .file
        .clone()
        .ok_or_else(|| ServiceError::Config("Log output 'file' requires a log file".to_string()))?;
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ServiceError::Config(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| ServiceError::Config(format!("Failed to open log file {:?}: {}", log_file, e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ServiceError> {
    if let Ok(filter) = EnvFilter::try_from_env("PROJTREE_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn determine_format(config: &LoggingConfig) -> Result<String, ServiceError> {
    if let Ok(format) = std::env::var("PROJTREE_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    if config.format != "json" && config.format != "text" {
        return Err(ServiceError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            config.format
        )));
    }

    Ok(config.format.clone())
}

fn determine_output(config: &LoggingConfig) -> Result<Output, ServiceError> {
    let output = std::env::var("PROJTREE_LOG_OUTPUT").unwrap_or_else(|_| config.output.clone());
    parse_output(&output).map_err(ServiceError::Config)
}
