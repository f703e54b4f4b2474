//! CLI execution context.

use std::path::Path;

use crate::config::AppConfig;
use crate::error::CliError;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Resolved configuration.
    pub config: AppConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Loads configuration (file, then environment) and wraps it with the
    /// output handler.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self, CliError> {
        let config = AppConfig::load(config_path)?;
        Ok(Self { config, output })
    }
}
