//! Export command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::helpers::load_releases;

/// Writes the (optionally filtered) release report to a JSON file
pub fn cmd_export(input: PathBuf, output: PathBuf, show_old: bool) -> Result<()> {
    let releases = load_releases(&input, show_old)?;

    releases
        .to_file(&output)
        .with_context(|| format!("Failed to export releases to {}", output.display()))?;

    eprintln!(
        "{} Wrote {} releases to {}",
        "✓".green(),
        releases.len().to_string().bold(),
        output.display().to_string().bright_white()
    );
    Ok(())
}
