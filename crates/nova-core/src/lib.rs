//! Nova Core - Release report models and output formatting
//!
//! This crate takes release records produced by an upstream comparison
//! engine and renders them as:
//! - a fixed-width plain-text table (`Display` for `Output`)
//! - a Markdown version diff for one release (`ReleaseOutput::to_markdown_table`)
//! - a JSON file (`Output::to_file`)

mod error;
mod fields;
mod file;
mod markdown;
mod models;
mod table;

pub use error::CoreError;
pub use fields::{fit_to_width, Field, FieldValue, ELLIPSIS, FIELD_ORDER, SEPARATOR};
pub use models::{Output, ReleaseOutput, VersionInfo};
pub use table::{header_line, NO_RELEASES};
