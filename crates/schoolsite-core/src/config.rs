//! Generator settings (`schoolsite.toml`).
//!
//! These settings control how an archive is produced. They are separate from
//! the per-school [`SiteConfig`](crate::site::SiteConfig), which describes what
//! the site contains.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default primary theme color.
pub const DEFAULT_PRIMARY: &str = "#2563eb";

/// Default secondary theme color.
pub const DEFAULT_SECONDARY: &str = "#1e293b";

/// Main settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Theme fallbacks.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// File name of the produced archive.
    #[serde(default = "default_archive_name")]
    pub archive_name: String,

    /// Whether to strip indentation and blank lines from HTML output.
    #[serde(default)]
    pub minify: bool,

    /// Whether pages are rendered in parallel.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

/// Theme fallbacks applied when a site leaves colors unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary color.
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Secondary color.
    #[serde(default = "default_secondary")]
    pub secondary: String,

    /// Web font stylesheet imported at the top of `style.css`.
    #[serde(default = "default_font_import")]
    pub font_import: String,
}

fn default_archive_name() -> String {
    "website.zip".to_string()
}

fn default_true() -> bool {
    true
}

fn default_primary() -> String {
    DEFAULT_PRIMARY.to_string()
}

fn default_secondary() -> String {
    DEFAULT_SECONDARY.to_string()
}

fn default_font_import() -> String {
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap"
        .to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            archive_name: default_archive_name(),
            minify: false,
            parallel: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            font_import: default_font_import(),
        }
    }
}

impl Config {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load settings using the config crate, with `SCHOOLSITE__` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("SCHOOLSITE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from `path` when it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the settings.
    fn validate(&self) -> Result<()> {
        if self.build.archive_name.is_empty() {
            return Err(CoreError::config("build.archive_name cannot be empty"));
        }

        if !self.build.archive_name.ends_with(".zip") {
            return Err(CoreError::config("build.archive_name must end with .zip"));
        }

        if self.theme.primary.is_empty() || self.theme.secondary.is_empty() {
            return Err(CoreError::config("theme colors cannot be empty"));
        }

        if !self.theme.font_import.starts_with("https://") {
            tracing::warn!("theme.font_import is not an https URL");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r##"
[build]
archive_name = "acme.zip"
minify = true
parallel = false

[theme]
primary = "#ff0000"
secondary = "#00ff00"
"##
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("schoolsite.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.build.archive_name, "acme.zip");
        assert!(config.build.minify);
        assert!(!config.build.parallel);
        assert_eq!(config.theme.primary, "#ff0000");
        assert_eq!(config.theme.secondary, "#00ff00");
        assert!(config.theme.font_import.contains("fonts.googleapis.com"));
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("schoolsite.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.build.archive_name, "website.zip");
        assert!(!config.build.minify);
        assert!(config.build.parallel);
        assert_eq!(config.theme.primary, DEFAULT_PRIMARY);
        assert_eq!(config.theme.secondary, DEFAULT_SECONDARY);
    }

    #[test]
    fn test_config_validation_archive_name() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("schoolsite.toml");
        std::fs::write(&config_path, "[build]\narchive_name = \"site.tar\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must end with .zip"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/schoolsite.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/schoolsite.toml"))
            .expect("defaults");
        assert_eq!(config.build.archive_name, "website.zip");
    }

    #[test]
    fn test_load_with_env_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("absent.toml");

        let config = Config::load_with_env(&config_path).expect("load");
        assert_eq!(config.theme.primary, DEFAULT_PRIMARY);
    }
}
