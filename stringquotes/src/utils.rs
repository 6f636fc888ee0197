//! Shared helpers: line/column mapping, suppression detection, path display.

use regex::Regex;
use ruff_text_size::TextSize;
use std::sync::OnceLock;

/// A utility struct to convert byte offsets to line/column positions.
///
/// This is necessary because the AST parser works with byte offsets,
/// but diagnostics are reported with line numbers and the quote validator
/// needs the column to index into the physical line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration for performance since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                // Record the start of the next line (current newline index + 1)
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        // Binary search to find which line range the offset falls into.
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a `TextSize` to a (1-indexed line, 0-indexed byte column) pair.
    #[must_use]
    pub fn line_col(&self, offset: TextSize) -> (usize, usize) {
        let line = self.line_index(offset);
        let col = offset.to_usize() - self.line_starts[line - 1];
        (line, col)
    }
}

/// Returns the compiled inline-suppression regex.
fn noqa_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"(?i)#\s*noqa").expect("Invalid noqa regex pattern"))
}

/// Checks a physical line for a `# noqa` suppression comment.
///
/// A suppressed line is fully exempt from diagnostics regardless of the
/// violations it contains.
#[must_use]
pub fn noqa(physical_line: &str) -> bool {
    noqa_re().is_match(physical_line)
}

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_line_index_maps_offsets() {
        let index = LineIndex::new("a = 1\nbb = 2\n");
        assert_eq!(index.line_index(TextSize::new(0)), 1);
        assert_eq!(index.line_index(TextSize::new(4)), 1);
        assert_eq!(index.line_index(TextSize::new(6)), 2);
        assert_eq!(index.line_index(TextSize::new(11)), 2);
    }

    #[test]
    fn test_line_col_is_relative_to_line_start() {
        let index = LineIndex::new("a = 1\nbb = 'x'\n");
        assert_eq!(index.line_col(TextSize::new(0)), (1, 0));
        assert_eq!(index.line_col(TextSize::new(11)), (2, 5));
    }

    #[test]
    fn test_noqa_detection() {
        assert!(noqa("x = \"Hello\"  # noqa"));
        assert!(noqa("x = 'Hello'  # NOQA"));
        assert!(noqa("x = 'Hello'  #noqa: S800"));
        assert!(!noqa("x = 'Hello'  # no qa"));
        assert!(!noqa("x = 'noqa'"));
    }

    #[test]
    fn test_normalize_display_path() {
        assert_eq!(
            normalize_display_path(Path::new("./src/main.py")),
            "src/main.py"
        );
        assert_eq!(
            normalize_display_path(Path::new(".\\pkg\\mod.py")),
            "pkg/mod.py"
        );
    }
}
