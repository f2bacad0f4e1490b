//! Plain-text table rendering

use crate::fields::{FIELD_ORDER, SEPARATOR};
use crate::models::{Output, ReleaseOutput};
use std::fmt;

/// Text printed in place of the table when there is nothing to report
pub const NO_RELEASES: &str = "No releases found";

/// Header line: every label padded to its column width
pub fn header_line() -> String {
    FIELD_ORDER
        .iter()
        .map(|field| field.header())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// One table row, columns in [`FIELD_ORDER`], no trailing newline
impl fmt::Display for ReleaseOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = FIELD_ORDER
            .iter()
            .map(|field| field.render(self))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        f.write_str(&row)
    }
}

/// Header followed by one row per release, joined by newlines
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NO_RELEASES);
        }
        log::debug!("Rendering table for {} releases", self.len());

        f.write_str(&header_line())?;
        for release in self {
            write!(f, "\n{}", release)?;
        }
        Ok(())
    }
}
