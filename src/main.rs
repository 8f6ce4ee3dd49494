use anyhow::{anyhow, Context};
use clap::Parser;
use logostamp::batch::{run_batch, ConsoleProgress, SilentProgress};
use logostamp::config::Config;
use std::path::PathBuf;

/// Logostamp - stamp a logo onto every image in a directory tree
#[derive(Parser, Debug)]
#[command(name = "logostamp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate configuration and exit
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    logostamp::logging::init_subscriber(&config.logging)
        .map_err(|e| anyhow!(e.to_string()))
        .context("Failed to initialize logging subsystem")?;

    config
        .validate()
        .map_err(|e| anyhow!(e))
        .context("Invalid configuration")?;

    tracing::info!(
        config_file = ?args.config,
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        mode = ?config.mode,
        "Configuration loaded successfully"
    );

    if args.check {
        return Ok(());
    }

    // A redrawn bar line would interleave with JSON log records.
    let summary = if config.logging.json {
        run_batch(&config, &SilentProgress)?
    } else {
        run_batch(&config, &ConsoleProgress::new())?
    };

    if summary.failed > 0 {
        tracing::warn!(failed = summary.failed, "Some images could not be stamped");
    }
    Ok(())
}
