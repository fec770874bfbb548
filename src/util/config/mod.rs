//! Cool configuration system
//!
//! User-level configuration lives in `~/.config/cool/config.toml`
//! (or `$XDG_CONFIG_HOME/cool/config.toml`). A missing file means defaults.
//!
//! ```toml
//! [fmt]
//! indent_width = 2
//! use_tabs = false
//!
//! [repl]
//! prompt = "cool> "
//!
//! [log]
//! level = "info"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cool::util::config::{load_user_config, UserConfig};
//!
//! let config = load_user_config().unwrap_or_default();
//! assert!(config.fmt.indent_width > 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::logger::LogLevel;

/// User-level configuration for Cool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Format settings
    #[serde(default)]
    pub fmt: FmtConfig,
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Format configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FmtConfig {
    /// Indent width
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Use tabs for indentation
    #[serde(default)]
    pub use_tabs: bool,
}

fn default_indent_width() -> usize {
    2
}

impl Default for FmtConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            use_tabs: false,
        }
    }
}

impl FmtConfig {
    /// The text of one indentation level
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// History file path
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Prompt shown while a block is still open
    #[serde(default = "default_continuation_prompt")]
    pub continuation_prompt: String,
}

fn default_history_size() -> usize {
    1000
}

fn default_prompt() -> String {
    "cool> ".to_string()
}

fn default_continuation_prompt() -> String {
    "....> ".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            history_file: None,
            prompt: default_prompt(),
            continuation_prompt: default_continuation_prompt(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("cool"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("cool"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("cool"));
    }

    None
}

/// Get the user config file path (~/.config/cool/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration text
pub fn parse_config(content: &str) -> Result<UserConfig, ConfigError> {
    let config: UserConfig = toml::from_str(content)?;
    if config.fmt.indent_width == 0 && !config.fmt.use_tabs {
        return Err(ConfigError::Invalid(
            "fmt.indent_width must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
