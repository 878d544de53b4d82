//! Alpha Radar - A terminal dashboard for narrative signals and smart-money
//! trade alerts.

use std::path::PathBuf;

use alpha_radar::config::{DeploymentMode, log_dir};
use alpha_radar::{App, Config, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments. Flags override the config file and environment.
#[derive(Debug, Parser)]
#[command(name = "alpha-radar", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to reach the feeds: `direct` or `proxied`.
    #[arg(long)]
    mode: Option<DeploymentMode>,

    /// Narrative feed URL.
    #[arg(long)]
    narrative_url: Option<String>,

    /// Alerts feed URL.
    #[arg(long)]
    alerts_url: Option<String>,

    /// Poll interval in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.feeds.mode = mode;
        }
        if let Some(url) = &self.narrative_url {
            config.feeds.narrative_url = Some(url.clone());
        }
        if let Some(url) = &self.alerts_url {
            config.feeds.alerts_url = Some(url.clone());
        }
        if let Some(ms) = self.interval_ms {
            config.polling.interval_ms = ms;
        }
    }
}

/// Log to a daily file; the terminal belongs to the dashboard.
fn init_logging(config: &Config) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(dir, &config.logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.clone())?;
    cli.apply(&mut config);

    if cli.init_config {
        let path = config.save(cli.config.clone())?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let _guard = init_logging(&config)?;

    // Run the application
    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
