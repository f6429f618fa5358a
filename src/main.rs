use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::{Commands, OutputFormat};
use tools_dashboard::config::Config;
use tools_dashboard::dashboard::Catalog;

/// Log to a file; stdout belongs to the TUI.
///
/// Returns true when `RUST_LOG` controls the level.
fn setup_logging() -> Result<bool> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tools-dashboard")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tools-dashboard.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let from_env = std::env::var_os("RUST_LOG").is_some();
    let mut builder = env_logger::Builder::from_default_env();
    if !from_env {
        // Level is narrowed with log::set_max_level once config is loaded
        builder.filter_level(LevelFilter::Trace);
    }
    builder.target(env_logger::Target::Pipe(target)).init();
    if !from_env {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(from_env)
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => tools_dashboard::tui::run(config).await,
        Some(Commands::List { format }) => handle_list_command(*format, config),
    }
}

fn handle_list_command(format: OutputFormat, config: &Config) -> Result<()> {
    info!("Listing catalog as {:?}", format);
    let catalog = Catalog::from_config(config.catalog.as_deref()).context("Invalid catalog in config")?;

    match format {
        OutputFormat::Json => println!("{}", catalog.to_json()?),
        OutputFormat::Yaml => print!("{}", catalog.to_yaml()?),
        OutputFormat::Text => {
            println!("{}", "AI Tools for Employees".bold());
            for tool in catalog.tools() {
                println!();
                println!("  {}", tool.name.green().bold());
                if !tool.description.is_empty() {
                    println!("  {}", tool.description);
                }
                println!("  {}", tool.url.cyan().underline());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let level_from_env = setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if !level_from_env {
        let level = if cli.is_verbose() {
            config.log_filter().max(LevelFilter::Debug)
        } else {
            config.log_filter()
        };
        log::set_max_level(level);
    }

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
