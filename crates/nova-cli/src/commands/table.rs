//! Table command implementation

use anyhow::Result;
use std::path::PathBuf;

use crate::helpers::load_releases;

/// Prints the fixed-width release table to stdout
pub fn cmd_table(input: PathBuf, show_old: bool) -> Result<()> {
    let output = load_releases(&input, show_old)?;
    println!("{}", output);
    Ok(())
}
