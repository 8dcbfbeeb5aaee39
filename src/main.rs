use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("neutral")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("neutral.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Rewrite {
            text,
            file,
            set,
            category,
            strict,
            agreement,
            output,
        } => commands::rewrite::run(
            commands::rewrite::RewriteArgs {
                text,
                file,
                set,
                category: category.map(Into::into),
                strict,
                agreement: agreement.map(Into::into),
                output,
                quiet: cli.quiet,
            },
            &config,
        ),
        Commands::Sets { format } => commands::sets::list(cli::OutputFormat::resolve(format), &config),
        Commands::Show { name, format } => commands::sets::show(&name, cli::OutputFormat::resolve(format)),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let log_level = if cli.verbose && config.log_level != LogLevel::Trace {
        LogLevel::Debug
    } else {
        config.log_level
    };
    setup_logging(log_level).context("Failed to setup logging")?;

    info!("Starting neutral with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
