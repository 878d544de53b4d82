//! Configuration management for Alpha Radar.

mod settings;

pub use settings::{
    Config, DeploymentMode, FeedConfig, KeyBindings, LoggingConfig, PollingConfig, UiConfig,
};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Prefix for environment variable overrides (`ALPHA_RADAR__FEEDS__MODE=proxied`).
pub const ENV_PREFIX: &str = "ALPHA_RADAR";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "alpha-radar", "alpha-radar")
        .ok_or_else(|| Error::config("Could not determine project directories"))
}

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the default configuration file path.
pub fn default_config_path() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Get the log directory path.
pub fn log_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}
