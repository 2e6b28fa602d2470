//! Config file discovery, parsing and merging.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Env var naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MUSEUM_OVERLAY_CONFIG";

/// Env var overriding the highlight colour.
pub const HIGHLIGHT_COLOR_ENV_VAR: &str = "MUSEUM_OVERLAY_HIGHLIGHT_COLOR";

/// Default highlight colour: opaque green, no chroma.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "0:255:0:255:0";

const APP_DIR: &str = "museum-overlay";
const LOG_FILE_NAME: &str = "museum-overlay.log";

/// Why a config file could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `MUSEUM_OVERLAY_CONFIG` is set but blank.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Config file.
        path: PathBuf,
        /// io error message.
        reason: String,
    },

    /// Bad TOML syntax, a wrong value type or an unknown key.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Config file.
        path: PathBuf,
        /// TOML error message.
        reason: String,
    },

    /// Highlight colour is not a `speed:alpha:red:green:blue` string.
    #[error("Invalid highlight color {0:?}, expected speed:alpha:red:green:blue")]
    InvalidColor(String),
}

/// Contents of `config.toml`. Absent keys fall back to [`ResolvedConfig::default`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Show the cheapest-undonated-item panel.
    #[serde(default)]
    pub cheapest_item_overlay: Option<bool>,

    /// Replace and highlight donated items.
    #[serde(default)]
    pub item_highlight: Option<bool>,

    /// Highlight colour as `speed:alpha:red:green:blue`.
    #[serde(default)]
    pub highlight_color: Option<String>,

    /// Entries kept by the donated-item name cache.
    #[serde(default)]
    pub resolver_cache_capacity: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Effective settings after file, defaults and env have been folded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Show the cheapest-undonated-item panel.
    pub cheapest_item_overlay: bool,
    /// Replace and highlight donated items.
    pub item_highlight: bool,
    /// Highlight colour as given, `speed:alpha:red:green:blue`.
    pub highlight_color: String,
    /// Entries kept by the donated-item name cache.
    pub resolver_cache_capacity: usize,
    /// Where tracing output is appended.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cheapest_item_overlay: true,
            item_highlight: true,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            resolver_cache_capacity: crate::cache::DEFAULT_CAPACITY,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Highlight colour as ARGB.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] if the string is malformed.
    pub fn highlight_argb(&self) -> Result<u32, ConfigError> {
        parse_special_color(&self.highlight_color)
    }
}

/// Parse a chroma colour string `speed:alpha:red:green:blue` into ARGB.
///
/// Channels are 0-255. The chroma speed is validated but the colour is
/// static; animated chroma is left to the host.
pub fn parse_special_color(special: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidColor(special.to_string());

    let parts: Vec<&str> = special.split(':').map(str::trim).collect();
    let [speed, alpha, red, green, blue] = parts[..] else {
        return Err(invalid());
    };
    speed.parse::<u32>().map_err(|_| invalid())?;

    let channel = |s: &str| s.parse::<u8>().map(u32::from).map_err(|_| invalid());
    Ok(channel(alpha)? << 24 | channel(red)? << 16 | channel(green)? << 8 | channel(blue)?)
}

/// `<state_dir>/museum-overlay/museum-overlay.log`, or a file in the working
/// directory on platforms without a state dir.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Read one config file; `Ok(None)` when it does not exist.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] for a file that
/// exists but is unusable.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path,
            reason: e.to_string(),
        })
}

/// `<config_dir>/museum-overlay/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Pick the config file: explicit `config_path`, else `MUSEUM_OVERLAY_CONFIG`,
/// else [`default_config_path`]. Only the first candidate is consulted.
///
/// # Errors
///
/// A blank env var, or a chosen file that exists but is unusable.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// `MUSEUM_OVERLAY_HIGHLIGHT_COLOR` replaces the highlight colour.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(color) = std::env::var(HIGHLIGHT_COLOR_ENV_VAR) {
        config.highlight_color = color;
    }

    config
}

/// Fold a config file over the defaults. A capacity of 0 keeps the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        cheapest_item_overlay: config
            .cheapest_item_overlay
            .unwrap_or(defaults.cheapest_item_overlay),
        item_highlight: config.item_highlight.unwrap_or(defaults.item_highlight),
        highlight_color: config.highlight_color.unwrap_or(defaults.highlight_color),
        resolver_cache_capacity: config
            .resolver_cache_capacity
            .filter(|capacity| *capacity > 0)
            .unwrap_or(defaults.resolver_cache_capacity),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Full chain: file (with precedence) → defaults → env overrides, then
/// validate the highlight colour.
///
/// # Errors
///
/// Returns error if a config file is broken or the colour is invalid.
pub fn resolve_config(config_path: Option<PathBuf>) -> Result<ResolvedConfig, ConfigError> {
    let config_file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(config_file));
    config.highlight_argb()?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
