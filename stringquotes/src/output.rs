//! Diagnostic rendering.

use crate::checker::Diagnostic;
use crate::utils::normalize_display_path;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

/// Print diagnostics in flake8-style `path:line:col: CODE message` lines.
///
/// The stored column offset is 0-based; display is 1-based to match how
/// editors and other checkers address columns.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_diagnostics(
    writer: &mut impl Write,
    diagnostics: &[Diagnostic],
    files_checked: usize,
) -> std::io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(
            writer,
            "{}:{}:{}: {} {}",
            normalize_display_path(&diagnostic.file),
            diagnostic.line,
            diagnostic.col + 1,
            diagnostic.rule_id.red().bold(),
            diagnostic.message
        )?;
    }

    if diagnostics.is_empty() {
        writeln!(
            writer,
            "{}",
            format!("No quote inconsistencies found in {files_checked} file(s).").green()
        )?;
    } else {
        writeln!(
            writer,
            "\n{}",
            format!(
                "Found {} quote inconsistency(ies) in {} file(s).",
                diagnostics.len(),
                files_checked
            )
            .bold()
        )?;
    }
    Ok(())
}

/// Print diagnostics as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(writer: &mut impl Write, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, diagnostics)?;
    writeln!(writer)?;
    Ok(())
}

/// A file that could not be parsed; reported and skipped.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// File that failed to parse.
    pub file: PathBuf,
    /// Parser error message.
    pub error: String,
}

/// Print parse failures as warnings.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_parse_errors(
    writer: &mut impl Write,
    parse_errors: &[ParseError],
) -> std::io::Result<()> {
    for parse_error in parse_errors {
        writeln!(
            writer,
            "{} {}: {}",
            "warning:".yellow().bold(),
            normalize_display_path(&parse_error.file),
            parse_error.error
        )?;
    }
    Ok(())
}
