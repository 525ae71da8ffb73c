//! Report formatting and printing utilities.
//!
//! Key reports are displayed in cargo-style format: severity and status,
//! the document the key was resolved in, and the key source with carets
//! under the part that failed. Separate from core logic to allow keyref to
//! be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, CompleteSummary, InitSummary, KeyReport, OutputFormat,
    ResolveSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{CatalogWarning, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    match (&result.summary, result.format) {
        (CommandSummary::Resolve(summary), OutputFormat::Text) => {
            print_resolve_to(summary, &mut stdout);
        }
        (CommandSummary::Resolve(summary), OutputFormat::Json) => {
            print_json(&summary.reports, &mut stdout);
        }
        (CommandSummary::Complete(summary), OutputFormat::Text) => {
            print_complete_to(summary, &mut stdout);
        }
        (CommandSummary::Complete(summary), OutputFormat::Json) => {
            let completions: Vec<String> = full_keys(summary).collect();
            print_json(
                &json!({
                    "key": summary.key,
                    "variants": summary.variants,
                    "completions": completions,
                }),
                &mut stdout,
            );
        }
        (CommandSummary::Init(summary), _) => {
            print_init(summary);
        }
    }
}

/// Print files skipped while loading the catalog to stderr.
///
/// Without `verbose` only the count is shown.
pub fn print_catalog_warnings(warnings: &[CatalogWarning], verbose: bool) {
    print_catalog_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

pub fn print_catalog_warnings_to<W: Write>(
    warnings: &[CatalogWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be loaded (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

pub fn print_resolve_to<W: Write>(summary: &ResolveSummary, writer: &mut W) {
    for report in &summary.reports {
        print_key_report(report, writer);
    }

    let errors = count_severity(&summary.reports, Severity::Error);
    let warnings = count_severity(&summary.reports, Severity::Warning);
    if errors + warnings > 0 {
        print_summary(errors, warnings, writer);
    } else {
        let key_count = summary.reports.len();
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Resolved {} {} against {} translation {} - no problems found",
                key_count,
                if key_count == 1 { "key" } else { "keys" },
                summary.document_count,
                if summary.document_count == 1 {
                    "file"
                } else {
                    "files"
                }
            )
            .green()
        );
    }
}

fn print_key_report<W: Write>(report: &KeyReport, writer: &mut W) {
    let head = match report.severity {
        Some(Severity::Error) => "error:".bold().red(),
        Some(Severity::Warning) => "warning:".bold().yellow(),
        None => SUCCESS_MARK.green(),
    };
    let _ = writeln!(
        writer,
        "{} \"{}\"  {}",
        head,
        report.key,
        report.status.to_string().dimmed().cyan()
    );

    match &report.file {
        Some(file) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file);
        }
        None => {
            let _ = writeln!(
                writer,
                "  {} no translation file for namespace \"{}\"",
                "-->".blue(),
                report.namespace
            );
        }
    }

    if let Some(severity) = report.severity {
        print_source(report, severity, writer);
    }

    if !report.resolved_path.is_empty() {
        let _ = writeln!(
            writer,
            "   {} {} {}",
            "=".blue(),
            "resolved:".bold(),
            report.resolved_path.join(".")
        );
    }
    if !report.unresolved.is_empty() {
        let _ = writeln!(
            writer,
            "   {} {} {}",
            "=".blue(),
            "missing:".bold(),
            report.unresolved.join(".")
        );
    }
    if let Some(value) = &report.value {
        let _ = writeln!(writer, "   {} {} {:?}", "=".blue(), "value:".bold(), value);
    }
    if !report.missing_in.is_empty() {
        let _ = writeln!(
            writer,
            "   {} {} {}",
            "=".blue(),
            "missing in:".bold(),
            report.missing_in.join(", ")
        );
    }

    let _ = writeln!(writer); // Empty line between keys
}

fn print_source<W: Write>(report: &KeyReport, severity: Severity, writer: &mut W) {
    let caret = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let prefix: String = report.source.chars().take(report.highlight.start).collect();
    let marked: String = report
        .source
        .chars()
        .skip(report.highlight.start)
        .take(report.highlight.len())
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let caret_count = UnicodeWidthStr::width(marked.as_str()).max(1);

    let _ = writeln!(writer, "   {}", "|".blue());
    let _ = writeln!(writer, "   {} {}", "|".blue(), report.source);
    let _ = writeln!(
        writer,
        "   {} {:>padding$}{}",
        "|".blue(),
        "",
        caret.to_string().repeat(caret_count),
        padding = caret_padding
    );
}

fn print_summary<W: Write>(total_errors: usize, total_warnings: usize, writer: &mut W) {
    let total_problems = total_errors + total_warnings;
    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        total_problems,
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn count_severity(reports: &[KeyReport], severity: Severity) -> usize {
    reports
        .iter()
        .filter(|r| r.severity == Some(severity))
        .count()
}

pub fn print_complete_to<W: Write>(summary: &CompleteSummary, writer: &mut W) {
    for key in full_keys(summary) {
        let _ = writeln!(writer, "{}", key);
    }
}

/// Completions as the typed key followed by each remainder.
fn full_keys(summary: &CompleteSummary) -> impl Iterator<Item = String> + '_ {
    summary
        .variants
        .iter()
        .map(|variant| format!("{}{}", summary.key, variant))
}

fn print_json<T: serde::Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(err) => eprintln!("Error: Failed to serialize output: {}", err),
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
