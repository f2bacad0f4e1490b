//! Nova CLI - Reports on installed Helm releases against their latest charts
//!
//! Provides:
//! - A fixed-width table of releases for the terminal
//! - Markdown version diffs for pull-request comments
//! - A JSON export of the full report

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_export, cmd_markdown, cmd_table};

#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "Renders Helm release version reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the releases as a fixed-width table
    Table {
        /// Release report produced by the comparison engine (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Only show releases that are behind their latest chart
        #[arg(long)]
        show_old: bool,
    },

    /// Prints a Markdown version diff for each release
    Markdown {
        /// Release report produced by the comparison engine (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Only print the diff for this release
        #[arg(short, long)]
        release: Option<String>,

        /// Only include releases that are behind their latest chart
        #[arg(long)]
        show_old: bool,
    },

    /// Writes the releases to a JSON file
    Export {
        /// Release report produced by the comparison engine (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Destination file, overwritten if it exists
        #[arg(short, long)]
        output: PathBuf,

        /// Only export releases that are behind their latest chart
        #[arg(long)]
        show_old: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    match cli.command {
        Commands::Table { input, show_old } => {
            cmd_table(input, show_old)?;
        }
        Commands::Markdown { input, release, show_old } => {
            cmd_markdown(input, release, show_old)?;
        }
        Commands::Export { input, output, show_old } => {
            cmd_export(input, output, show_old)?;
        }
    }

    Ok(())
}
