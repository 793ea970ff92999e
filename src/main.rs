//! Signup - extracurricular activity signup service
//!
//! Main entry point for the signup CLI and server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use signup_api::{ApiServer, AppState};
use signup_config::{Config, ConfigError, ConfigLoader, ConfigValidator, LoggingConfig};
use signup_core::ActivityRegistry;

mod cli;

use cli::{Cli, Commands, OutputFormat};

/// Initialize tracing with console and optional file output.
///
/// Console output goes to stderr so `activities --format json` stays clean.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = if logging.file {
        let log_dir = logging.resolved_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("signup")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the writer alive for the program duration
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Config file used when neither `--config` nor `SIGNUP_CONFIG` is given.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Resolve and load the configuration.
///
/// Only the implicit default path may be missing; an explicit path must exist.
fn load_config(explicit: Option<PathBuf>) -> Result<(PathBuf, Config), ConfigError> {
    match explicit {
        Some(path) => {
            let config = ConfigLoader::load(&path)?;
            Ok((path, config))
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            let config = ConfigLoader::load_or_default(&path)?;
            Ok((path, config))
        }
    }
}

/// Validate the config and build the registry from its seed.
fn build_registry(config: &Config) -> Result<ActivityRegistry, Box<dyn std::error::Error>> {
    let warnings = ConfigValidator::validate(config).into_result()?;
    for warning in &warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    Ok(ActivityRegistry::with_activities(config.seed())?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (config_path, config) = load_config(cli.config)?;

    match cli.command {
        None => run_server(config, None, None).await,
        Some(Commands::Run { host, port }) => run_server(config, host, port).await,
        Some(Commands::Activities { format }) => print_activities(&config, format),
        Some(Commands::Check) => check_config(&config_path, &config),
    }
}

/// Run the server in foreground.
async fn run_server(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&config.logging)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    info!("Starting signup v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(build_registry(&config)?);
    info!("Loaded {} activities", registry.len());

    let state = Arc::new(AppState::new(registry));
    let server = ApiServer::new(config.server.clone(), state);

    info!("Signup ready:");
    info!("  UI:         http://{}/", server.addr());
    info!("  Activities: http://{}/activities", server.addr());

    server.run().await?;

    info!("Shutting down...");
    Ok(())
}

/// Print the activities the server would start with.
fn print_activities(
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = build_registry(config)?;
    let catalog = registry.list_activities();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Table => {
            println!("{:<24} {:>6} {:>6}  SCHEDULE", "ACTIVITY", "TAKEN", "LEFT");
            for (name, activity) in catalog.iter() {
                println!(
                    "{:<24} {:>6} {:>6}  {}",
                    name,
                    activity.participants.len(),
                    activity.spots_left(),
                    activity.schedule
                );
            }
        }
    }
    Ok(())
}

/// Validate the configuration and report problems.
fn check_config(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if result.is_valid() {
        ActivityRegistry::with_activities(config.seed())?;
        println!("{}: ok", path.display());
        Ok(())
    } else {
        Err(format!("{}: {} error(s)", path.display(), result.errors.len()).into())
    }
}
