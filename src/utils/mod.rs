//! Utility modules.

pub mod file;

pub use file::{calculate_checksum, display_file_name};
