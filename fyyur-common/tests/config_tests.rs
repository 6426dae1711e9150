//! Tests for settings resolution
//!
//! Priority order: command line > environment > config file > compiled default.
//! A broken or missing config file must never stop startup.
//!
//! Tests that touch FYYUR_* environment variables are marked #[serial] so
//! they do not race each other.

use fyyur_common::config::{
    load_config_file, load_optional_config, load_settings, resolve_settings, CliOverrides,
    CompiledDefaults, LoggingConfig, TomlConfig, ENV_BIND, ENV_CONFIG, ENV_DATABASE, ENV_LOG_FILE,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    for name in [ENV_DATABASE, ENV_BIND, ENV_LOG_FILE, ENV_CONFIG] {
        env::remove_var(name);
    }
}

fn file_config() -> TomlConfig {
    TomlConfig {
        database_path: Some(PathBuf::from("/from/file.db")),
        bind_addr: Some("0.0.0.0:7000".to_string()),
        logging: LoggingConfig {
            level: Some("debug".to_string()),
            file: Some(PathBuf::from("/from/file.log")),
        },
    }
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();
    let settings = resolve_settings(&CliOverrides::default(), None);
    let defaults = CompiledDefaults::for_current_platform();

    assert_eq!(settings.database_path, defaults.database_path);
    assert_eq!(settings.bind_addr, defaults.bind_addr);
    assert_eq!(settings.log_level, "info");
    assert!(settings.log_file.is_none());
}

#[test]
#[serial]
fn test_config_file_beats_defaults() {
    clear_env();
    let settings = resolve_settings(&CliOverrides::default(), Some(&file_config()));

    assert_eq!(settings.database_path, PathBuf::from("/from/file.db"));
    assert_eq!(settings.bind_addr, "0.0.0.0:7000");
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.log_file, Some(PathBuf::from("/from/file.log")));
}

#[test]
#[serial]
fn test_environment_beats_config_file() {
    clear_env();
    env::set_var(ENV_DATABASE, "/from/env.db");
    env::set_var(ENV_BIND, "127.0.0.1:6000");

    let settings = resolve_settings(&CliOverrides::default(), Some(&file_config()));
    assert_eq!(settings.database_path, PathBuf::from("/from/env.db"));
    assert_eq!(settings.bind_addr, "127.0.0.1:6000");

    clear_env();
}

#[test]
#[serial]
fn test_command_line_beats_environment() {
    clear_env();
    env::set_var(ENV_DATABASE, "/from/env.db");
    env::set_var(ENV_LOG_FILE, "/from/env.log");

    let cli = CliOverrides {
        database_path: Some(PathBuf::from("/from/cli.db")),
        log_file: Some(PathBuf::from("/from/cli.log")),
        ..Default::default()
    };
    let settings = resolve_settings(&cli, Some(&file_config()));
    assert_eq!(settings.database_path, PathBuf::from("/from/cli.db"));
    assert_eq!(settings.log_file, Some(PathBuf::from("/from/cli.log")));

    clear_env();
}

#[test]
#[serial]
fn test_blank_environment_value_is_ignored() {
    clear_env();
    env::set_var(ENV_BIND, "   ");

    let settings = resolve_settings(&CliOverrides::default(), Some(&file_config()));
    assert_eq!(settings.bind_addr, "0.0.0.0:7000");

    clear_env();
}

#[test]
fn test_load_config_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "database_path = \"/srv/fyyur.db\"\n").unwrap();

    let config = load_config_file(&path).expect("config should parse");
    assert_eq!(config.database_path, Some(PathBuf::from("/srv/fyyur.db")));
    assert_eq!(config.bind_addr, None);
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "database_path = [unterminated").unwrap();

    assert!(load_config_file(&path).is_err());
    // ...but optional loading degrades to "no config"
    assert!(load_optional_config(Some(&path)).is_none());
}

#[test]
#[serial]
fn test_config_path_from_environment() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "bind_addr = \"10.0.0.1:5000\"\n").unwrap();
    env::set_var(ENV_CONFIG, &path);

    let config = load_optional_config(None).expect("config from FYYUR_CONFIG");
    assert_eq!(config.bind_addr.as_deref(), Some("10.0.0.1:5000"));

    clear_env();
}

#[test]
#[serial]
fn test_explicit_config_file_is_loaded() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "bind_addr = \"0.0.0.0:8080\"\n[logging]\nlevel = \"warn\"\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(path),
        ..Default::default()
    };
    let settings = load_settings(&cli);
    assert_eq!(settings.bind_addr, "0.0.0.0:8080");
    assert_eq!(settings.log_level, "warn");
}
