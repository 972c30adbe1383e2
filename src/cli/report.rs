//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format. Separate from the engine so the
//! analysis can be used as a library without pulling in terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CleanSummary, CommandResult, CommandSummary, InitSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Line numbers are right-aligned to the widest one.
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }
}

/// Print a success message when no unused styles are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no unused styles found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print the findings summary line for a check run.
pub fn print_findings(unused_count: usize, file_count: usize) {
    print_findings_to(unused_count, file_count, &mut io::stdout().lock());
}

pub fn print_findings_to<W: Write>(unused_count: usize, file_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {} unused {} across {} {}",
        FAILURE_MARK.red(),
        unused_count,
        if unused_count == 1 { "style" } else { "styles" }.yellow(),
        file_count,
        if file_count == 1 { "file" } else { "files" }
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based, width-aware).
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(ctx) => (
            ctx.location.file_path.as_str(),
            ctx.location.line,
            ctx.location.col,
            Some(&ctx.source_line),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.location.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            report(&result.issues);
            print_check(summary, result.source_files_checked);
        }
        CommandSummary::Clean(summary) => {
            // Unused styles get the dry-run/apply summary below, but parse
            // failures still need a line naming the file.
            let parse_issues: Vec<Issue> = result
                .issues
                .iter()
                .filter(|i| matches!(i, Issue::ParseError(_)))
                .cloned()
                .collect();
            report(&parse_issues);
            print_clean(summary, result.source_files_checked);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_check(summary: &CheckSummary, source_files_checked: usize) {
    if summary.unused_count > 0 {
        print_findings(summary.unused_count, summary.file_count);
    } else {
        print_success(source_files_checked);
    }
}

fn print_clean(summary: &CleanSummary, source_files_checked: usize) {
    if summary.unused_count == 0 {
        print_success(source_files_checked);
        return;
    }

    if !summary.is_apply {
        for issue in &summary.unused_issues {
            println!(
                "  {} '{}' {}:{}",
                "-".yellow(),
                issue.name,
                issue.context.location.file_path,
                issue.context.location.line
            );
        }
        println!(
            "{} {} {} across {} {}.",
            "Would remove".yellow().bold(),
            summary.unused_count,
            if summary.unused_count == 1 { "style" } else { "styles" },
            summary.file_count,
            if summary.file_count == 1 { "file" } else { "files" }
        );
        println!("Run with {} to remove these styles.", "--apply".cyan());
    } else {
        println!(
            "{} {} {} across {} {}.",
            "Removed".green().bold(),
            summary.removed_count,
            if summary.removed_count == 1 { "style" } else { "styles" },
            summary.file_count - summary.failed_count,
            if summary.file_count - summary.failed_count == 1 { "file" } else { "files" }
        );
        if summary.failed_count > 0 {
            println!(
                "{} {} file(s) could not be rewritten and were left unchanged",
                "warning:".bold().yellow(),
                summary.failed_count
            );
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
