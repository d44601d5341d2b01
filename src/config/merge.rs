//! Merge rules: defaults, override order.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("execution", "blocking")?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
