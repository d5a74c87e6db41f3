//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fragnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Variant;
use crate::core::navigator::{DEFAULT_MAIN_CONTAINER, DEFAULT_OVERLAY_CONTAINER, DEFAULT_PAGE_URL};
use crate::surface::Selectors;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FragnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub page_url: Option<String>,
    pub variant: Option<Variant>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SelectorConfig {
    pub main_container: Option<String>,
    pub overlay_container: Option<String>,
    pub reading_class: Option<String>,
    pub close_id: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "fragnav.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub page_url: String,
    pub variant: Variant,
    pub log_file: String,
    pub main_container: String,
    pub overlay_container: String,
    pub selectors: Selectors,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.fragnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fragnav").join("config.toml"))
}

/// Load config from `~/.fragnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FragnavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FragnavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FragnavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FragnavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<FragnavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FragnavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# fragnav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_url = "http://localhost:5000/"   # Or set FRAGNAV_PAGE_URL env var
# variant = "in-place"                  # "in-place" or "overlay" (FRAGNAV_VARIANT)
# log_file = "fragnav.log"

# [selectors]
# main_container = "html5"              # id of the list/detail container
# overlay_container = "overlay"         # id of the overlay panel
# reading_class = "reading"             # class marking reading links
# close_id = "goHome"                   # id of the close/home affordance
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_variant` and `cli_page_url` are from CLI flags (None = not specified).
pub fn resolve(
    config: &FragnavConfig,
    cli_variant: Option<Variant>,
    cli_page_url: Option<&str>,
) -> ResolvedConfig {
    // Page URL: CLI → env → config → default
    let page_url = cli_page_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FRAGNAV_PAGE_URL").ok())
        .or_else(|| config.general.page_url.clone())
        .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());

    // Variant: CLI → env → config → default
    let variant = cli_variant
        .or_else(env_variant)
        .or(config.general.variant)
        .unwrap_or_default();

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let defaults = Selectors::default();
    let selectors = Selectors {
        reading_class: config
            .selectors
            .reading_class
            .clone()
            .unwrap_or(defaults.reading_class),
        close_id: config
            .selectors
            .close_id
            .clone()
            .unwrap_or(defaults.close_id),
    };

    ResolvedConfig {
        page_url,
        variant,
        log_file,
        main_container: config
            .selectors
            .main_container
            .clone()
            .unwrap_or_else(|| DEFAULT_MAIN_CONTAINER.to_string()),
        overlay_container: config
            .selectors
            .overlay_container
            .clone()
            .unwrap_or_else(|| DEFAULT_OVERLAY_CONTAINER.to_string()),
        selectors,
    }
}

/// Reads `FRAGNAV_VARIANT`, ignoring values that name no variant.
fn env_variant() -> Option<Variant> {
    let raw = std::env::var("FRAGNAV_VARIANT").ok()?;
    match Variant::from_str(&raw, true) {
        Ok(variant) => Some(variant),
        Err(e) => {
            warn!("Ignoring FRAGNAV_VARIANT: {}", e);
            None
        }
    }
}
