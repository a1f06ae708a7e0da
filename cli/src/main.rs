//! CLI entrypoint for folio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use folio_application::Site;
use folio_domain::ConfigIssue;
use folio_infrastructure::{ConfigLoader, FileConfig, JsonlInteractionLogger};
use folio_presentation::{Cli, ConsoleSession, ConsoleSurface};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, file_config.logging.file_path().as_deref())?;

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let (config, issues) = file_config.to_interaction_config();
    if report_issues(&issues) {
        bail!("Configuration has errors; fix them or run with --no-config");
    }

    info!("Starting folio");

    // === Dependency Injection ===
    let surface = Arc::new(ConsoleSurface::stdout());
    let mut site = Site::new(&config, surface.clone())?;

    if let Some(path) = file_config.logging.interaction_log_path() {
        match JsonlInteractionLogger::new(&path) {
            Some(logger) => {
                info!("Recording interactions to {}", logger.path().display());
                site = site.with_logger(Arc::new(logger));
            }
            None => warn!("Interaction log disabled"),
        }
    }

    let mut session = ConsoleSession::new(site, surface);
    session.start();

    match &cli.script {
        Some(path) => {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            session.run_script(&script);
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session.run_interactive(stdin).await?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print configuration issues; returns true when any of them is an error
fn report_issues(issues: &[ConfigIssue]) -> bool {
    for issue in issues {
        if issue.is_error() {
            eprintln!("{} {}", "error:".red().bold(), issue.message);
        } else {
            eprintln!("{} {}", "warning:".yellow().bold(), issue.message);
        }
    }
    issues.iter().any(ConfigIssue::is_error)
}
