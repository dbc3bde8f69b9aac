//! Command-line argument parsing and handling.

pub mod categories;
pub mod definition;
pub mod generate;
pub mod print;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, OutputFormat, process_args};
pub use utils::{determine_log_level, resolve_data_source};
