//! Report formatting and printing utilities.
//!
//! Kept apart from the collector so the collector can be used as a library
//! without any terminal output.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CollectReport, CommandResult, CommandSummary, InitSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Collect(report) => {
            // Keep stdout clean when it carries the payload itself.
            if report.to_stdout() {
                print_collect_to(report, &mut io::stderr().lock());
            } else {
                print_collect_to(report, &mut io::stdout().lock());
            }
            print_skipped_warning(report.summary.skipped_count, verbose);
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Print the collection summary to a custom writer.
pub fn print_collect_to<W: Write>(report: &CollectReport, writer: &mut W) {
    let summary = &report.summary;
    let destination = if report.to_stdout() {
        "stdout"
    } else {
        report.output.as_str()
    };

    let msg = if summary.file_count == 0 {
        format!(
            "No matching files under {}, wrote empty payload to {}",
            report.root, destination
        )
    } else {
        format!(
            "Collected {} {} ({} {}) into {}",
            summary.file_count,
            plural(summary.file_count, "file", "files"),
            summary.byte_count,
            plural(summary.byte_count, "byte", "bytes"),
            destination
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about entries that could not be read.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skipped-entries warning to a custom writer.
///
/// In verbose mode each failure was already logged, so only the count is
/// repeated without the hint.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count == 0 {
        return;
    }
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read and were skipped",
            "warning:".bold().yellow(),
            count
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read and were skipped (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// Tests
// ============================================================
