//! Configuration settings for Alpha Radar.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed endpoint configuration.
    pub feeds: FeedConfig,
    /// Polling schedule.
    pub polling: PollingConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Log output.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration, layering defaults, the TOML file at `path` (or the
    /// default config path) and `ALPHA_RADAR__*` environment variables.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(super::default_config_path);
        let env = ::config::Environment::with_prefix(super::ENV_PREFIX).separator("__");
        Self::build(&config_path, env)
    }

    fn build(path: &Path, env: ::config::Environment) -> crate::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Self::default())?)
            .add_source(::config::File::from(path).required(false))
            .add_source(env)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<PathBuf> {
        let config_path = path.unwrap_or_else(super::default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }
}

/// How the feeds are reached.
///
/// `Direct` talks to each backend on its own localhost port; `Proxied` goes
/// through a single reverse proxy that serves both feeds under `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    #[default]
    Direct,
    Proxied,
}

impl std::str::FromStr for DeploymentMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "proxied" | "proxy" => Ok(Self::Proxied),
            other => Err(crate::Error::config(format!(
                "unknown deployment mode '{other}' (expected 'direct' or 'proxied')"
            ))),
        }
    }
}

/// Feed endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Deployment mode used to derive endpoint URLs.
    pub mode: DeploymentMode,
    /// Origin of the reverse proxy in `proxied` mode.
    pub proxy_origin: String,
    /// Explicit narrative feed URL, overriding the mode.
    pub narrative_url: Option<String>,
    /// Explicit alerts feed URL, overriding the mode.
    pub alerts_url: Option<String>,
    /// Request timeout in seconds. Unset means requests may hang forever.
    pub timeout_secs: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            mode: DeploymentMode::Direct,
            proxy_origin: "http://localhost:3000".to_string(),
            narrative_url: None,
            alerts_url: None,
            timeout_secs: None,
        }
    }
}

impl FeedConfig {
    /// Resolved narrative feed URL.
    pub fn narrative_endpoint(&self) -> String {
        if let Some(url) = &self.narrative_url {
            return url.clone();
        }
        match self.mode {
            DeploymentMode::Direct => "http://localhost:5000/api/narrative".to_string(),
            DeploymentMode::Proxied => self.proxied("/api/narrative"),
        }
    }

    /// Resolved alerts feed URL.
    pub fn alerts_endpoint(&self) -> String {
        if let Some(url) = &self.alerts_url {
            return url.clone();
        }
        match self.mode {
            DeploymentMode::Direct => "http://localhost:8080/api/alerts".to_string(),
            DeploymentMode::Proxied => self.proxied("/api/alerts"),
        }
    }

    /// Request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn proxied(&self, path: &str) -> String {
        format!("{}{}", self.proxy_origin.trim_end_matches('/'), path)
    }
}

/// Polling schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Interval between ticks in milliseconds.
    pub interval_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 10_000,
        }
    }
}

impl PollingConfig {
    /// Tick interval. Zero is clamped to one millisecond.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI redraws and the loading animation.
    pub tick_rate_ms: u64,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            show_status_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Refresh both feeds immediately.
    pub refresh: String,
    /// Show help.
    pub help: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            refresh: "r".to_string(),
            help: "?".to_string(),
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub filter: String,
    /// File name prefix for the daily log file.
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "alpha_radar=info".to_string(),
            file_name: "alpha-radar.log".to_string(),
        }
    }
}
