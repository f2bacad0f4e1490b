//! Markdown fragments for embedding in larger reports

use crate::models::ReleaseOutput;

impl ReleaseOutput {
    /// Generates a two-row Markdown table comparing installed and latest versions
    ///
    /// Example output:
    /// ```text
    /// | | Old | New |
    /// |-|-|-|
    /// | Version | 1.0.0 | 1.2.0 |
    /// | AppVersion | v1 | v2 |
    /// ```
    ///
    /// Version strings are inserted verbatim; escaping is left to the caller.
    pub fn to_markdown_table(&self) -> String {
        format!(
            "| | Old | New |\n|-|-|-|\n| Version | {} | {} |\n| AppVersion | {} | {} |",
            self.installed.version,
            self.latest.version,
            self.installed.app_version,
            self.latest.app_version
        )
    }
}
