//! Terminal color support for formatting output.
//!
//! With the `std` feature (default) this uses the `colored` crate, which
//! respects `NO_COLOR`, `TERM` and TTY detection. Without `std` text is
//! returned unchanged.

extern crate alloc;
use alloc::string::String;

#[cfg(feature = "std")]
use colored::Colorize;

/// Semantic role of a piece of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Null hypothesis retained.
    Retained,
    /// Null hypothesis rejected.
    Rejected,
    /// Caveats about the result.
    Caution,
    /// Section titles and statistic names.
    Heading,
    /// Secondary details.
    Muted,
}

/// Render `s` in the given style.
#[cfg(feature = "std")]
pub fn paint(s: &str, style: Style) -> String {
    match style {
        Style::Retained => s.green().bold().to_string(),
        Style::Rejected => s.red().bold().to_string(),
        Style::Caution => s.yellow().to_string(),
        Style::Heading => s.bold().to_string(),
        Style::Muted => s.dimmed().to_string(),
    }
}

/// Render `s` in the given style.
#[cfg(not(feature = "std"))]
pub fn paint(s: &str, _style: Style) -> String {
    String::from(s)
}
