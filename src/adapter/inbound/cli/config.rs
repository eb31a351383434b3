//! Configuration loading shared by CLI handlers.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load the config file, if present, and apply environment overrides.
///
/// Validation is left to the individual commands.
#[allow(clippy::result_large_err)]
pub fn load_config(path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    config.apply_env(|name| std::env::var(name).ok())?;
    Ok(config)
}
