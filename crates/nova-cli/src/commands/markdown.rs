//! Markdown command implementation

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::helpers::{load_releases, markdown_heading, select_releases};

/// Prints a heading and version diff table per selected release.
///
/// An empty report prints nothing; naming a release that is not in the
/// report is an error.
pub fn cmd_markdown(input: PathBuf, release: Option<String>, show_old: bool) -> Result<()> {
    let output = load_releases(&input, show_old)?;
    let selected = select_releases(&output, release.as_deref());

    if selected.is_empty() {
        if let Some(name) = release {
            bail!("Release '{}' not found in {}", name, input.display());
        }
        eprintln!("{} No releases found in {}", "ℹ".bright_cyan(), input.display());
        return Ok(());
    }

    let sections: Vec<String> = selected
        .iter()
        .map(|r| format!("{}\n\n{}", markdown_heading(r), r.to_markdown_table()))
        .collect();
    println!("{}", sections.join("\n\n"));

    eprintln!(
        "{} Rendered {} version diff{}",
        "✓".green(),
        selected.len().to_string().bold(),
        if selected.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
