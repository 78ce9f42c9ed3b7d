//! CLI for the Rapid Geotechnical & Seismic Analyzer client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use rgsa_core::config;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_analyze, run_completions, run_config, run_health, run_man};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rgsa")]
#[command(
    about = "Rapid Geotechnical & Seismic Analyzer: request a hazard screening PDF for a property address",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Submit an address and save the returned PDF report.
    Analyze {
        /// Property address, e.g. "123 Main St, San Jose, CA".
        address: String,
        /// Backend base URL (overrides `api_base` in config.toml).
        #[arg(long, value_name = "URL")]
        api_base: Option<String>,
        /// Directory to save the report in (overrides `output_dir`; default: current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Check that the backend is up.
    Health {
        /// Backend base URL (overrides `api_base` in config.toml).
        #[arg(long, value_name = "URL")]
        api_base: Option<String>,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Print a shell completion script.
    Completions {
        /// Shell to generate for.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Analyze {
                address,
                api_base,
                output_dir,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_analyze(&cfg, address, api_base, output_dir).await
            }
            CliCommand::Health { api_base } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_health(&cfg, api_base).await
            }
            CliCommand::Config => run_config(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

#[cfg(test)]
mod tests;
