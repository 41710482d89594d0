//! Report formatting and printing utilities.
//!
//! Rendering writes to any [`Write`] sink so that output can be captured in
//! tests. Progress and diagnostics go through `log`; only the report itself
//! is written here.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Summary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const SEPARATOR_WIDTH: usize = 80;
const FILE_RULE_WIDTH: usize = 40;

/// Print a command result to stdout (and init errors to stderr).
pub fn print(result: &CommandResult) -> io::Result<()> {
    match &result.summary {
        CommandSummary::Check(check) => match check.format {
            OutputFormat::Text => report_to(check, &mut io::stdout().lock()),
            OutputFormat::Json => report_json_to(check, &mut io::stdout().lock()),
        },
        CommandSummary::Init(init) => {
            print_init_to(init, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
    }
}

/// Render the text report.
pub fn report_to<W: Write>(check: &CheckSummary, writer: &mut W) -> io::Result<()> {
    print_header(check, writer)?;

    let report = &check.report;
    if report.is_empty() {
        writeln!(
            writer,
            "{} No variable references found ({} {} scanned)",
            "warning:".bold().yellow(),
            report.files_scanned,
            plural(report.files_scanned, "file", "files")
        )?;
        return Ok(());
    }

    for group in report.groups() {
        writeln!(writer)?;
        writeln!(writer, "File: {}", group.display_path.bold())?;
        writeln!(writer, "{}", "-".repeat(FILE_RULE_WIDTH))?;
        for entry in group.entries {
            let mark = if entry.found {
                SUCCESS_MARK.green()
            } else {
                FAILURE_MARK.red()
            };
            writeln!(writer, "  {} .Values.{}", mark, entry.reference)?;
        }
    }

    writeln!(writer)?;
    print_summary(check, &report.summary(), writer)
}

fn print_header<W: Write>(check: &CheckSummary, writer: &mut W) -> io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(writer, "{}", separator)?;
    writeln!(writer, "{}", "HELM VARIABLE REFERENCE CHECKER REPORT".bold())?;
    writeln!(writer, "{}", separator)?;
    for root in &check.roots {
        writeln!(writer, "Chart root: {}", root.as_str())?;
    }
    if let Some(manifest) = &check.manifest {
        writeln!(writer, "Manifest: {}", manifest.display())?;
    }
    writeln!(writer, "Values file: {}", check.values_file.display())?;
    writeln!(writer, "{}", separator)
}

fn print_summary<W: Write>(
    check: &CheckSummary,
    summary: &Summary,
    writer: &mut W,
) -> io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(writer, "{}", separator)?;
    writeln!(
        writer,
        "SUMMARY: {}/{} variables found in values file ({} {} scanned)",
        summary.found,
        summary.total,
        summary.files_scanned,
        plural(summary.files_scanned, "file", "files")
    )?;
    if summary.missing > 0 {
        writeln!(
            writer,
            "{} {} {} missing from {}",
            "warning:".bold().yellow(),
            summary.missing,
            plural(summary.missing, "variable is", "variables are"),
            check.values_file.display()
        )?;
    } else {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All variables are present in the values file!".green()
        )?;
    }
    writeln!(writer, "{}", separator)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    chart_roots: Vec<&'a str>,
    values_file: String,
    manifest: Option<String>,
    files: Vec<JsonFile<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    references: Vec<JsonReference<'a>>,
}

#[derive(Serialize)]
struct JsonReference<'a> {
    reference: &'a str,
    found: bool,
}

/// Render the report as pretty-printed JSON, in the same order as the text report.
pub fn report_json_to<W: Write>(check: &CheckSummary, writer: &mut W) -> io::Result<()> {
    let files = check
        .report
        .groups()
        .into_iter()
        .map(|group| JsonFile {
            path: group.display_path,
            references: group
                .entries
                .iter()
                .map(|e| JsonReference {
                    reference: &e.reference,
                    found: e.found,
                })
                .collect(),
        })
        .collect();

    let json = JsonReport {
        chart_roots: check.roots.iter().map(|r| r.as_str()).collect(),
        values_file: check.values_file.display().to_string(),
        manifest: check.manifest.as_ref().map(|m| m.display().to_string()),
        files,
        summary: check.report.summary(),
    };

    serde_json::to_writer_pretty(&mut *writer, &json)?;
    writeln!(writer)
}

fn print_init_to<W: Write, E: Write>(
    init: &InitSummary,
    writer: &mut W,
    err_writer: &mut E,
) -> io::Result<()> {
    if init.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )
    } else {
        writeln!(err_writer, "Error: {} already exists", CONFIG_FILE_NAME)
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
