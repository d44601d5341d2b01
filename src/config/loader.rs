//! Layered configuration loading.

use super::merge;
use super::sources::{global_file, workspace_file};
use super::ProjtreeConfig;
use crate::error::ServiceError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::Path;
use tracing::debug;

/// Environment prefix; `PROJTREE_LOGGING__LEVEL=debug` sets `logging.level`.
const ENV_PREFIX: &str = "PROJTREE";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root.
    ///
    /// Precedence (lowest first): defaults, global file, `<root>/.projtree.toml`,
    /// environment.
    pub fn load(root: &Path) -> Result<ProjtreeConfig, ServiceError> {
        let global = global_file::global_config_path();
        Self::load_layers(global.as_deref(), root)
    }

    /// Load from an explicit file instead of the global and project files.
    pub fn load_from_file(path: &Path) -> Result<ProjtreeConfig, ServiceError> {
        if !path.is_file() {
            return Err(ServiceError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?.add_source(File::from(path));
        Self::finish(builder)
    }

    /// Load with an explicit global file location. `None` skips the global layer.
    pub fn load_layers(global: Option<&Path>, root: &Path) -> Result<ProjtreeConfig, ServiceError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<ProjtreeConfig, ServiceError> {
        let config: ProjtreeConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        debug!(execution = ?config.execution, "Configuration loaded");
        config.validated()
    }
}
