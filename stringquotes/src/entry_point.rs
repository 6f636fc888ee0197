//! Shared entry point for the binary and for tests.

use crate::checker::{Diagnostic, StringChecker, CHECKER_NAME};
use crate::cli::Cli;
use crate::config::Config;
use crate::output::{self, ParseError};
use crate::quotes::PreferredQuote;
use anyhow::Result;
use clap::Parser;
use ignore::WalkBuilder;
use ruff_python_parser::parse_module;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::PathBuf;

/// Runs the checker with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if a source file disappears between discovery and
/// checking, or if writing output fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the checker with the given arguments, writing output to the
/// specified writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture. Returns the process exit code: 0 when every checked file is
/// consistent, 1 when violations were found.
///
/// # Errors
///
/// Returns an error if a source file cannot be re-read during checking, or
/// if writing output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec![CHECKER_NAME.to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(2);
                }
            }
        }
    };

    let preferred = resolve_preference(&cli);
    let files = collect_python_files(&cli.paths);
    let checker = StringChecker::new(preferred);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut parse_errors: Vec<ParseError> = Vec::new();

    for file in &files {
        // Unreadable files are fatal for the run, matching the single-file
        // failure semantics of the checker itself.
        let source = fs::read_to_string(file).map_err(|e| {
            anyhow::anyhow!("Failed to read source file {}: {}", file.display(), e)
        })?;
        match parse_module(&source) {
            Ok(parsed) => {
                let module = parsed.into_syntax();
                diagnostics.extend(checker.run(&module, file)?);
            }
            Err(e) => parse_errors.push(ParseError {
                file: file.clone(),
                error: format!("{e}"),
            }),
        }
    }

    output::print_parse_errors(writer, &parse_errors)?;
    if cli.json {
        output::print_json(writer, &diagnostics)?;
    } else {
        output::print_diagnostics(writer, &diagnostics, files.len())?;
    }

    Ok(i32::from(!diagnostics.is_empty()))
}

/// CLI flag wins over the configuration file; single quotes by default.
fn resolve_preference(cli: &Cli) -> PreferredQuote {
    if let Some(preferred) = cli.string_quotes {
        return preferred;
    }
    let config_root = cli
        .paths
        .first()
        .map_or_else(|| PathBuf::from("."), Clone::clone);
    let config = Config::load_from_path(&config_root);
    config.stringquotes.string_quotes.unwrap_or_default()
}

/// Collects `.py` files from the given paths, honoring gitignore rules for
/// directory arguments. Explicit file arguments are always included. The
/// result is deduplicated and sorted for deterministic diagnostic order
/// across runs.
fn collect_python_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if seen.insert(path.clone()) {
                files.push(path.clone());
            }
            continue;
        }
        for entry in WalkBuilder::new(path).build().flatten() {
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if entry.path().extension().is_some_and(|ext| ext == "py") {
                let entry_path = entry.into_path();
                if seen.insert(entry_path.clone()) {
                    files.push(entry_path);
                }
            }
        }
    }

    files.sort();
    files
}
