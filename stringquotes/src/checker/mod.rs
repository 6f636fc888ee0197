//! PEP-8 string quote consistency checking.
//!
//! The checker re-reads the physical source lines of the file under
//! analysis: the parsed tree alone does not carry the raw text needed to
//! inspect quote characters and string prefixes at exact columns.

mod validator;
mod visitor;

pub use validator::quotes_are_valid;

use crate::quotes::{PreferredQuote, QuoteStyle};
use crate::utils::LineIndex;
use anyhow::Result;
use ruff_python_ast::ModModule;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use visitor::LiteralVisitor;

/// Descriptive name of the checker.
pub const CHECKER_NAME: &str = "stringquotes";
/// Reporter identity attached to every diagnostic; hosts use it to group,
/// filter, and suppress findings.
pub const RULE_CODE: &str = "S800";

/// Distinguishes string literals from bytes literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// A string literal (`'...'`, `"..."`, with optional `r`/`u` prefix).
    Str,
    /// A bytes literal (`b'...'`, `b"..."`).
    Bytes,
}

/// A single string or bytes literal as written in source, with position
/// metadata. Produced by the traversal; read-only input to the validator.
#[derive(Debug, Clone)]
pub struct LiteralOccurrence {
    /// 1-based line the opening delimiter sits on.
    pub line: usize,
    /// 0-based byte column of the literal token (including any prefix letter)
    /// within its physical line. `None` when the literal spans more than one
    /// physical line.
    pub col: Option<usize>,
    /// Decoded content. Bytes literals are decoded as ASCII text so the
    /// validator has a single code path.
    pub value: String,
    /// String vs. bytes.
    pub kind: LiteralKind,
}

/// A single quote-consistency violation.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// File the violation was found in.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column offset of the literal token.
    pub col: usize,
    /// Human-readable message embedding the preferred quote character.
    pub message: String,
    /// ID of the reporting rule.
    pub rule_id: &'static str,
}

/// Collects every string and bytes literal of a parsed module in document
/// order (depth-first, left-to-right).
#[must_use]
pub fn collect_literals(module: &ModModule, line_index: &LineIndex) -> Vec<LiteralOccurrence> {
    let mut visitor = LiteralVisitor::new(line_index);
    for stmt in &module.body {
        visitor.visit_stmt(stmt);
    }
    visitor.literals
}

/// PEP-8 string quote consistency checker.
///
/// One instance holds the configured preference; each [`StringChecker::run`]
/// call re-reads the file and re-traverses the tree, so repeated runs see a
/// fresh view with no cached state.
#[derive(Debug, Clone)]
pub struct StringChecker {
    preferred: QuoteStyle,
}

impl StringChecker {
    /// Creates a checker enforcing the given preference.
    #[must_use]
    pub fn new(preferred: PreferredQuote) -> Self {
        Self {
            preferred: preferred.style(),
        }
    }

    /// Checks all string and bytes literals of a parsed file for quote
    /// consistency, returning violations in ascending (line, column) order.
    ///
    /// The file at `file_path` is re-read to obtain physical lines; a read
    /// failure is fatal for this file and propagates to the caller. A literal
    /// whose line number exceeds the physical line count is a parser/file
    /// contract violation and panics rather than being silently skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the source file cannot be read.
    pub fn run(&self, module: &ModModule, file_path: &Path) -> Result<Vec<Diagnostic>> {
        let source = fs::read_to_string(file_path).map_err(|e| {
            anyhow::anyhow!("Failed to read source file {}: {}", file_path.display(), e)
        })?;
        let physical_lines: Vec<&str> = source.lines().collect();
        let line_index = LineIndex::new(&source);

        let mut diagnostics = Vec::new();
        for occurrence in collect_literals(module, &line_index) {
            // 1-based line number into the 0-indexed stored lines.
            let physical_line = physical_lines[occurrence.line - 1];
            if !quotes_are_valid(&occurrence, self.preferred, physical_line) {
                diagnostics.push(Diagnostic {
                    file: file_path.to_path_buf(),
                    line: occurrence.line,
                    col: occurrence.col.unwrap_or_default(),
                    message: format!(
                        "Inconsistent string quotes found, should be {}",
                        self.preferred
                    ),
                    rule_id: RULE_CODE,
                });
            }
        }
        Ok(diagnostics)
    }
}
