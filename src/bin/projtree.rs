//! Projtree CLI Binary
//!
//! Command-line interface for the project tree service.

use clap::Parser;
use projtree::cli::{Cli, RunContext};
use projtree::config::ConfigLoader;
use projtree::logging::{init_logging, LoggingConfig};
use std::path::Path;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Projtree CLI starting");

    let context = match RunContext::new(cli.root.clone(), cli.config.clone(), cli.mode) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run context: {}", e);
            eprintln!("{}", projtree::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            debug!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", projtree::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match (&cli.config, &cli.root) {
        (Some(config_path), _) => ConfigLoader::load_from_file(config_path),
        (None, Some(root)) => ConfigLoader::load(root),
        (None, None) => ConfigLoader::load(Path::new(".")),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
