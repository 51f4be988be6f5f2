//! CLI for the gitask repository URL prompt.

mod commands;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gitask_core::config;

use commands::{run_ask, run_check, run_config, run_translate};

/// Top-level CLI for gitask.
#[derive(Debug, Parser)]
#[command(name = "gitask")]
#[command(about = "gitask: ask for a git repository URL and make sure it works", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ask interactively until a usable repository URL is given, then print it.
    Ask {
        /// Question to show (defaults to the configured one).
        #[arg(long)]
        question: Option<String>,
        /// Only check syntax and transport; skip the network probe.
        #[arg(long)]
        no_probe: bool,
    },

    /// Validate a single URL without prompting.
    Check {
        /// Repository URL to check.
        url: String,
        /// Only check syntax and transport; skip the network probe.
        #[arg(long)]
        no_probe: bool,
    },

    /// Print the HTTPS equivalent of a repository URL.
    Translate {
        /// Repository URL in any git transport (ssh, scp-like, git, http).
        url: String,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Ask { question, no_probe } => {
                run_ask(&cfg, question.as_deref(), !no_probe).await?
            }
            CliCommand::Check { url, no_probe } => run_check(&cfg, &url, !no_probe).await?,
            CliCommand::Translate { url } => run_translate(&url)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
