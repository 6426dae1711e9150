//! Configuration loading and settings resolution
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or unreadable config file is never fatal; it is logged and the
//! remaining sources are used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the database path
pub const ENV_DATABASE: &str = "FYYUR_DATABASE";
/// Environment variable overriding the listen address
pub const ENV_BIND: &str = "FYYUR_BIND";
/// Environment variable naming a log file
pub const ENV_LOG_FILE: &str = "FYYUR_LOG_FILE";
/// Environment variable pointing at an explicit config file
pub const ENV_CONFIG: &str = "FYYUR_CONFIG";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    pub database_path: Option<PathBuf>,
    pub bind_addr: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[logging]` table of `config.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Fallback values when no other source provides a setting
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub database_path: PathBuf,
    pub bind_addr: String,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        let data_dir = dirs::data_local_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("./fyyur_data"));

        Self {
            database_path: data_dir.join("fyyur.db"),
            bind_addr: "127.0.0.1:5000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<PathBuf>,
    pub bind_addr: Option<String>,
    pub log_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database_path: PathBuf,
    pub bind_addr: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

/// Resolve settings from CLI, environment, config file and defaults
pub fn resolve_settings(cli: &CliOverrides, file: Option<&TomlConfig>) -> Settings {
    let defaults = CompiledDefaults::for_current_platform();
    let file_logging = file.map(|f| &f.logging);

    let database_path = cli
        .database_path
        .clone()
        .or_else(|| env_path(ENV_DATABASE))
        .or_else(|| file.and_then(|f| f.database_path.clone()))
        .unwrap_or(defaults.database_path);

    let bind_addr = cli
        .bind_addr
        .clone()
        .or_else(|| env_string(ENV_BIND))
        .or_else(|| file.and_then(|f| f.bind_addr.clone()))
        .unwrap_or(defaults.bind_addr);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env_path(ENV_LOG_FILE))
        .or_else(|| file_logging.and_then(|l| l.file.clone()));

    let log_level = file_logging
        .and_then(|l| l.level.clone())
        .unwrap_or(defaults.log_level);

    Settings {
        database_path,
        bind_addr,
        log_level,
        log_file,
    }
}

/// Locate the config file: explicit path, then `FYYUR_CONFIG`, then the
/// platform config directory
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_path(ENV_CONFIG) {
        return Some(path);
    }

    let user_config = dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))?;
    user_config.exists().then_some(user_config)
}

/// Parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Load the config file if one can be found, logging and ignoring failures
pub fn load_optional_config(explicit: Option<&Path>) -> Option<TomlConfig> {
    let path = locate_config_file(explicit)?;
    match load_config_file(&path) {
        Ok(config) => {
            debug!("Loaded config file {}", path.display());
            Some(config)
        }
        Err(e) => {
            warn!("Ignoring config file {}: {}", path.display(), e);
            None
        }
    }
}

/// Load the config file named by `cli` (or found on disk) and resolve settings
pub fn load_settings(cli: &CliOverrides) -> Settings {
    let file = load_optional_config(cli.config_file.as_deref());
    resolve_settings(cli, file.as_ref())
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env_string(name).map(PathBuf::from)
}
