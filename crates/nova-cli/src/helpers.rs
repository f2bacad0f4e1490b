//! Helper functions for CLI operations

use anyhow::{Context, Result};
use nova_core::{Output, ReleaseOutput};
use std::path::Path;

/// Loads the release report and optionally drops up-to-date releases
pub fn load_releases(input: &Path, show_old: bool) -> Result<Output> {
    let output = Output::from_file(input)
        .with_context(|| format!("Failed to load releases from {}", input.display()))?;

    if show_old {
        let outdated = output.outdated();
        log::debug!(
            "Keeping {} of {} releases (outdated only)",
            outdated.len(),
            output.len()
        );
        Ok(outdated)
    } else {
        Ok(output)
    }
}

/// Picks the releases to diff: one by name, or all of them
pub fn select_releases<'a>(output: &'a Output, name: Option<&str>) -> Vec<&'a ReleaseOutput> {
    match name {
        Some(name) => output.iter().filter(|r| r.release_name == name).collect(),
        None => output.iter().collect(),
    }
}

/// Heading line placed above a release's Markdown diff
pub fn markdown_heading(release: &ReleaseOutput) -> String {
    format!("### {} ({})", release.release_name, release.chart_name)
}
