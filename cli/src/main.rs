//! # lemonutils Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `lemon` binary, the
//! command-line front end of the lemonutils filesystem helpers.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the shared `FileHelper`
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each command group (`file`, `dir`) is a variant in the `Commands` enum
//! - Every handler receives the same configured `FileHelper`, so failures are
//!   reported on the diagnostic channel unless `--quiet` is given
//! - All errors are propagated to this level, printed once, and turned into exit status 1
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! lemon --help
//!
//! # Print a file with debug logging
//! lemon -vv file read notes.txt
//!
//! # Use an explicit config file and suppress failure reports
//! lemon --config ./ci.lemon.toml --quiet dir size ./target
//! ```
//!
use clap::Parser;
use lemonutils::common::fs::{Diagnostics, FileHelper};
use lemonutils::core::config::{self, Config};
use lemonutils::core::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "lemon",
    about = "🍋 lemonutils: small, predictable filesystem helpers",
    long_about = "Read, write, list, copy, move and measure files and directories.\n\
                  Operations never overwrite existing entries and report every failure.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Do not report failed operations on the diagnostic channel.
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Load settings from this file instead of searching for `.lemon.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "f")]
    File(commands::file::FileArgs),
    #[command(alias = "d")]
    Dir(commands::dir::DirArgs),
}

fn build_helper(cli: &Cli) -> Result<FileHelper> {
    let config = match &cli.config {
        Some(path) => config::load_config_file(&commands::expand_path(path))?,
        None => config::load_config()?,
    };
    Ok(helper_for(&config, cli.quiet))
}

fn helper_for(config: &Config, quiet: bool) -> FileHelper {
    let helper = FileHelper::from_config(config);
    if quiet {
        helper.with_diagnostics(Diagnostics::silent())
    } else {
        helper
    }
}

async fn run(cli: Cli) -> Result<()> {
    let helper = build_helper(&cli)?;
    match cli.command {
        Commands::File(args) => commands::file::handle_file(args, &helper).await,
        Commands::Dir(args) => commands::dir::handle_dir(args, &helper).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::debug!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
