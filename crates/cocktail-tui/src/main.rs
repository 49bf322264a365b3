//! `cocktail-tui`: look up cocktail recipes by name from the terminal.
//!
//! Built on [ratatui](https://ratatui.rs). Type a name (or pick one from the
//! catalog) and press Enter; the matched drink's details and ingredient list
//! appear in the recipe panel.
//!
//! Logs are written to a file (default `/tmp/cocktail-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod components;
mod event;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cocktail_config::{Config, config_path, load_config, load_config_from, save_config_to};
use cocktail_core::{Controller, LookupClient, LookupConfig};

use crate::app::App;

/// Terminal lookup for cocktail recipes.
#[derive(Parser, Debug)]
#[command(name = "cocktail-tui", version, about)]
struct Cli {
    /// API root URL (overrides the config file)
    #[arg(short = 'u', long, env = "COCKTAIL_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Config file path (defaults to the platform config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Log file path (defaults to /tmp/cocktail-tui.log)
    #[arg(long, default_value = "/tmp/cocktail-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log to `--log-file` only; the terminal belongs to the lookup screen.
/// Logs are flushed while the returned guard is alive.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cocktail_tui={log_level},cocktail_core={log_level},cocktail_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("cocktail-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Config file, then CLI flags on top.
fn build_lookup_config(cli: &Cli) -> Result<LookupConfig> {
    let mut cfg = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    if let Some(url) = &cli.base_url {
        cfg.api.base_url.clone_from(url);
    }
    if let Some(secs) = cli.timeout {
        cfg.api.timeout_secs = Some(secs);
    }

    Ok(cocktail_config::to_lookup_config(&cfg)?)
}

/// Write the default config unless a file is already there.
fn init_config(cli: &Cli) -> Result<()> {
    let path = cli.config.clone().unwrap_or_else(config_path);
    if path.exists() {
        println!("config already exists: {}", path.display());
        return Ok(());
    }
    save_config_to(&path, &Config::default())?;
    println!("wrote {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks first, so errors while loading config are reported cleanly
    tui::install_hooks()?;

    if cli.init_config {
        return init_config(&cli);
    }

    // Tracing to file: hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = build_lookup_config(&cli)?;
    info!(
        base_url = %config.base_url,
        timeout = ?config.timeout,
        "starting cocktail-tui"
    );

    let lookup = LookupClient::from_config(&config)?;
    let mut app = App::new(Controller::new(config.catalog()), lookup);
    app.run().await?;

    Ok(())
}
