//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.numconv/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file and level come out of this module, so nothing here logs
//! directly: messages are collected in [`ConfigNotes`] and written by the
//! caller once the logger is up.

use clap::ValueEnum;
use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::base::Base;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NumconvConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_base: Option<Base>,
    pub show_prefixes: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOW_PREFIXES: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "numconv.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base: Base,
    pub show_prefixes: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

// ============================================================================
// Deferred Log Messages
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

/// Messages gathered while loading and resolving, in the order they happened.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigNotes(Vec<ConfigNote>);

impl ConfigNotes {
    fn push(&mut self, level: Level, message: String) {
        self.0.push(ConfigNote { level, message });
    }

    fn debug(&mut self, message: String) {
        self.push(Level::Debug, message);
    }

    fn info(&mut self, message: String) {
        self.push(Level::Info, message);
    }

    fn warn(&mut self, message: String) {
        self.push(Level::Warn, message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigNote> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any note's message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.0.iter().any(|n| n.message.contains(needle))
    }

    /// Sends every note to the `log` facade.
    pub fn flush(self) {
        for note in self.0 {
            log::log!(note.level, "{}", note.message);
        }
    }
}

/// Values the command line can override. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base: Option<Base>,
    pub no_prefix: bool,
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

/// Returns the path to `~/.numconv/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".numconv").join("config.toml"))
}

/// Load config from `~/.numconv/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NumconvConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut ConfigNotes) -> Result<NumconvConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notes.warn("Could not determine home directory, using default config".to_string());
            return Ok(NumconvConfig::default());
        }
    };

    if !path.exists() {
        notes.info(format!("No config file found, generating default at {}", path.display()));
        generate_default_config(&path, notes);
        return Ok(NumconvConfig::default());
    }

    load_config_from(&path, notes)
}

pub fn load_config_from(path: &Path, notes: &mut ConfigNotes) -> Result<NumconvConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NumconvConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.info(format!("Loaded config from {}", path.display()));
    notes.debug(format!("Config: {:?}", config));
    Ok(config)
}

fn generate_default_config(path: &Path, notes: &mut ConfigNotes) {
    let default_content = r#"# numconv configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_base = "decimal"    # "binary", "octal", "decimal" or "hexadecimal"
# show_prefixes = true        # show 0b / 0o / 0x in front of results

# [logging]
# level = "info"              # "off", "error", "warn", "info", "debug", "trace"
# file = "numconv.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            notes.warn(format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.warn(format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NumconvConfig, cli: &CliOverrides, notes: &mut ConfigNotes) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notes)
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with_env(
    config: &NumconvConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    // Base: CLI → env → config → default
    let base = cli
        .base
        .or_else(|| env("NUMCONV_BASE").and_then(|s| parse_base(&s, notes)))
        .or(config.general.default_base)
        .unwrap_or_default();

    let show_prefixes = !cli.no_prefix
        && config
            .general
            .show_prefixes
            .unwrap_or(DEFAULT_SHOW_PREFIXES);

    // Log level: env → config → default
    let log_level = env("NUMCONV_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|s| parse_level(&s, notes))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into();

    ResolvedConfig {
        base,
        show_prefixes,
        log_level,
        log_file,
    }
}

/// Accepts the same spellings as the `--from` flag (`hex`, `16`, `hexadecimal`).
fn parse_base(s: &str, notes: &mut ConfigNotes) -> Option<Base> {
    match Base::from_str(s.trim(), true) {
        Ok(base) => Some(base),
        Err(_) => {
            notes.warn(format!("Ignoring unknown base {s:?}"));
            None
        }
    }
}

fn parse_level(s: &str, notes: &mut ConfigNotes) -> Option<LevelFilter> {
    match s.trim().parse() {
        Ok(level) => Some(level),
        Err(_) => {
            notes.warn(format!("Ignoring unknown log level {s:?}"));
            None
        }
    }
}
