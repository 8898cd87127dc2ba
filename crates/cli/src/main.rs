//! flightdeck - Status.json telemetry CLI
//!
//! Decodes recorded `Status.json` frames and replays them through a status
//! monitor to show the transitions a live session would publish.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "flightdeck")]
#[command(about = "Decode and replay Elite Dangerous Status.json telemetry")]
#[command(version)]
#[command(long_about = "
flightdeck decodes the Status.json record the game rewrites while playing
and replays recorded sessions to list the state changes they contain.

Input files hold one JSON record per line. Use - to read from stdin.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every status frame in a file
    Decode {
        /// Recorded status lines, or - for stdin
        input: String,
        /// Only print the last decoded frame
        #[arg(short, long)]
        last: bool,
    },

    /// Replay a file through a status monitor and print its transitions
    Replay {
        /// Recorded status lines, or - for stdin
        input: String,
        /// Monitor configuration (YAML)
        #[arg(short, long, env = "FLIGHTDECK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// List the fields transitions are reported for
    Fields,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("flightdeck_cli={log_level},flightdeck_monitor={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Decode { input, last } => commands::decode::execute(input, *last, cli.json),
        Commands::Replay { input, config } => {
            commands::replay::execute(input, config.as_deref(), cli.json).await
        }
        Commands::Fields => commands::fields::execute(cli.json),
    }
}
