//! Output formatting for test reports.
//!
//! - Terminal: human-readable text with colors
//! - JSON: machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_batch, format_report};
