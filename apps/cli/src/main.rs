//! Profile Manager
//!
//! Command-line front end for the profile store:
//! - Listing, searching, creating, editing and deleting profiles
//! - Statistics and the recent activity feed
//! - JSON export and batch replay of operations
//! - Dark mode preference, cache clearing and sign-out

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod export;
mod preferences;
mod state;

use commands::Commands;
use config::AppConfig;
use state::AppState;

/// Profile Manager - manage employee profiles
#[derive(Parser)]
#[command(name = "profile-manager")]
#[command(about = "Profile Manager - manage employee profiles")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.verbose {
        0 => {}
        1 => config.log_level = "info".to_string(),
        2 => config.log_level = "debug".to_string(),
        _ => config.log_level = "trace".to_string(),
    }

    init_tracing(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        locale = %config.locale,
        "Starting Profile Manager"
    );

    let state = AppState::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = commands::execute(&state, cli.command, &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "profile_manager={level},profile_store={level},validation={level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
