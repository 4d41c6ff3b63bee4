//! Terminal output formatting with colors.
//!
//! Builds on the plain summary layout from `smirnov-core`; colors come from
//! `colored` and follow its `NO_COLOR` / TTY handling.

use colored::Colorize;
use smirnov_core::formatting::{format_decision, format_p_value, format_summary, SEPARATOR};

use crate::error::Error;
use crate::result::Report;

/// Format a Report for human-readable terminal output.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("smirnov\n");
    out.push_str(SEPARATOR);
    out.push_str("\n\n");

    out.push_str(&format_summary(&report.summary));
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        format_decision(&report.summary, report.alpha)
    ));

    if report.small_sample {
        out.push_str(&format!(
            "\n  {} {}\n",
            "\u{26A0}".yellow(),
            format!(
                "Effective sample size {} is small; the p-value is coarse.",
                report.summary.effective_sample_size
            )
            .yellow()
        ));
    }

    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Format one line per batch entry, in input order.
///
/// ```text
///   #0  Dn  = 0.4200  p = 0.0031  reject
///   #1  Dn  = 0.1000  p = 0.9500  retain
///   #2  error: first sample is empty; at least one observation is required
/// ```
pub fn format_batch(results: &[Result<Report, Error>]) -> String {
    let mut out = String::new();
    let mut rejected = 0;

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(report) => {
                let verdict = if report.is_significant() {
                    rejected += 1;
                    report.verdict.to_string().red().bold()
                } else {
                    report.verdict.to_string().green()
                };
                out.push_str(&format!(
                    "  #{:<3} {:<3} = {:.4}  p = {:<8}  {}\n",
                    i,
                    report.alternative().statistic_name(),
                    report.statistic(),
                    format_p_value(report.p_value()),
                    verdict
                ));
            }
            Err(e) => {
                out.push_str(&format!("  #{:<3} {} {}\n", i, "error:".red(), e));
            }
        }
    }

    out.push_str(&format!(
        "\n  {} of {} comparisons rejected\n",
        rejected,
        results.len()
    ));
    out
}
