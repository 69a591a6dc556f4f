//! Command implementations.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use schoolsite_core::Config;

pub mod build;
pub mod check;
pub mod new;

/// Load generator settings the way every command sees them: the optional
/// settings file, then `SCHOOLSITE__` environment overrides.
pub fn load_settings(config_path: &Path) -> Result<Config> {
    Config::load_with_env(config_path).wrap_err("Failed to load settings")
}
