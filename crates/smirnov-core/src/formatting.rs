//! Human-readable rendering of test outcomes.
//!
//! Output includes ANSI colors when the `std` feature is enabled (see
//! [`crate::colors`]), plain text otherwise.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::colors::{paint, Style};
use crate::result::TestSummary;

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// p-values below this are printed in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Format a p-value with four decimals, or in scientific notation when tiny.
pub fn format_p_value(p: f64) -> String {
    if p == 0.0 {
        String::from("0")
    } else if p < SCIENTIFIC_BELOW {
        format!("{:.2e}", p)
    } else {
        format!("{:.4}", p)
    }
}

/// Format a summary block without a significance decision.
pub fn format_summary(summary: &TestSummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, summary);
    out
}

/// Format the reject/retain line for a summary at level `alpha`.
pub fn format_decision(summary: &TestSummary, alpha: f64) -> String {
    if summary.significant(alpha) {
        paint(
            &format!("\u{2717} Reject H0 at alpha = {}", alpha),
            Style::Rejected,
        )
    } else {
        paint(
            &format!("\u{2713} No significant difference at alpha = {}", alpha),
            Style::Retained,
        )
    }
}

pub(crate) fn write_summary<W: Write>(out: &mut W, summary: &TestSummary) -> fmt::Result {
    let kind = match summary.n2 {
        Some(_) => "two-sample",
        None => "one-sample",
    };
    writeln!(
        out,
        "{}",
        paint(&format!("Kolmogorov-Smirnov test ({})", kind), Style::Heading)
    )?;
    writeln!(out, "  H1: {}", summary.alternative)?;
    writeln!(
        out,
        "  {} = {:.4}   p = {} {}",
        paint(summary.alternative.statistic_name(), Style::Heading),
        summary.statistic,
        format_p_value(summary.p_value),
        paint(&format!("({})", summary.tail), Style::Muted),
    )?;
    match summary.n2 {
        Some(n2) => writeln!(
            out,
            "  n1 = {}, n2 = {}, effective n = {}",
            summary.n1, n2, summary.effective_sample_size
        ),
        None => writeln!(out, "  n = {}", summary.n1),
    }
}
