//! Project config file source: `<root>/.projtree.toml`
//!
//! The leading dot makes the file a service entry, so listing and purge never touch it.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

pub const PROJECT_CONFIG_FILE: &str = ".projtree.toml";

/// Add the project config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if path.is_file() {
        Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
    } else {
        Ok(builder)
    }
}
