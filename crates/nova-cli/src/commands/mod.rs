//! Command implementations

mod export;
mod markdown;
mod table;

pub use export::cmd_export;
pub use markdown::cmd_markdown;
pub use table::cmd_table;
