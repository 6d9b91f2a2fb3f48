// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::display::{DEFAULT_HEADING_PATTERN, DEFAULT_LOCALE, parse_locale};
use crate::model::{Category, HeadingStyle, TripData};
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_heading_format() -> String {
    DEFAULT_HEADING_PATTERN.to_string()
}

fn default_category() -> Category {
    Category::Food
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Trip document to read instead of the bundled one.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    /// Locale for day headings. `None` follows the system locale, then Spanish.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "default_heading_format")]
    pub day_heading_format: String,
    /// Category given to new activities the keyword heuristic can't place.
    #[serde(default = "default_category")]
    pub default_category: Category,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            locale: None,
            // Match the serde defaults
            day_heading_format: default_heading_format(),
            default_category: default_category(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the config file does not exist.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    /// Resolves the heading locale: configured value, then system locale,
    /// then Spanish.
    pub fn heading_style(&self) -> HeadingStyle {
        let locale = self
            .locale
            .as_deref()
            .and_then(|name| {
                let parsed = parse_locale(name);
                if parsed.is_none() {
                    log::warn!("Unknown locale '{}' in config, ignoring", name);
                }
                parsed
            })
            .or_else(|| sys_locale::get_locale().and_then(|l| parse_locale(&l)))
            .unwrap_or(DEFAULT_LOCALE);
        HeadingStyle::new(&self.day_heading_format, locale)
    }

    /// Reads the configured seed file, or the bundled trip when none is set.
    pub fn load_seed(&self) -> Result<TripData> {
        match &self.seed_path {
            Some(path) => TripData::from_path(path),
            None => TripData::bundled(),
        }
    }
}
