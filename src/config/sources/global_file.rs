//! Global config file source: $XDG_CONFIG_HOME/projtree/config.toml (or the platform equivalent)

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("projtree").join("config.toml"))
}

/// Add the global config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match path {
        Some(path) if path.is_file() => Ok(builder.add_source(File::from(path).required(false))),
        Some(path) => {
            debug!(config_path = %path.display(), "No global configuration file");
            Ok(builder)
        }
        None => Ok(builder),
    }
}
