use super::LiteralOccurrence;
use crate::quotes::QuoteStyle;
use crate::utils;

/// Checks a string or bytes literal occurrence for quote validity.
///
/// `physical_line` is the raw source line the literal starts on; the
/// validator never needs continuation lines because multi-line literals are
/// exempt. A literal with the non-preferred quote is still accepted when its
/// content contains the opposite quote character, since switching delimiters
/// would force escaping. Triple-quoted literals are block-string syntax and
/// exempt from the preference entirely.
#[must_use]
pub fn quotes_are_valid(
    occurrence: &LiteralOccurrence,
    preferred: QuoteStyle,
    physical_line: &str,
) -> bool {
    // Ignore multi-line strings.
    let Some(col) = occurrence.col else {
        return true;
    };

    if utils::noqa(physical_line) {
        return true;
    }

    // Window wide enough for the longest delimiter plus a prefix letter,
    // e.g. r"""
    let window: String = physical_line[col..].chars().take(4).collect();

    // Ignore string prefix (e.g. r'').
    let window = window
        .strip_prefix(|c: char| c.is_alphabetic())
        .unwrap_or(&window);

    let Some(style) = window.chars().next().and_then(QuoteStyle::from_char) else {
        return true;
    };

    if style != preferred
        && !occurrence.value.contains(style.opposite().as_str())
        && !window.starts_with(QuoteStyle::TripleSingle.as_str())
        && !window.starts_with(QuoteStyle::TripleDouble.as_str())
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::LiteralKind;

    fn occurrence(col: Option<usize>, value: &str) -> LiteralOccurrence {
        LiteralOccurrence {
            line: 1,
            col,
            value: value.to_owned(),
            kind: LiteralKind::Str,
        }
    }

    #[test]
    fn test_multi_line_literal_is_exempt() {
        let occ = occurrence(None, "Hello\n");
        assert!(quotes_are_valid(&occ, QuoteStyle::Single, "s = \"\"\""));
        assert!(quotes_are_valid(&occ, QuoteStyle::Double, "s = \"\"\""));
    }

    #[test]
    fn test_noqa_line_is_exempt() {
        let occ = occurrence(Some(4), "Hello");
        assert!(quotes_are_valid(
            &occ,
            QuoteStyle::Single,
            "s = \"Hello\"  # noqa"
        ));
    }

    #[test]
    fn test_prefix_letter_shifts_window() {
        let occ = occurrence(Some(4), "Hello");
        assert!(!quotes_are_valid(&occ, QuoteStyle::Single, "s = R\"Hello\""));
        assert!(quotes_are_valid(&occ, QuoteStyle::Double, "s = R\"Hello\""));
    }

    #[test]
    fn test_opposite_quote_in_content_justifies_mismatch() {
        let occ = occurrence(Some(4), "it's");
        assert!(quotes_are_valid(&occ, QuoteStyle::Single, "s = \"it's\""));
    }

    #[test]
    fn test_triple_quoted_is_exempt() {
        let occ = occurrence(Some(4), "Hello");
        assert!(quotes_are_valid(
            &occ,
            QuoteStyle::Single,
            "s = \"\"\"Hello\"\"\""
        ));
        assert!(quotes_are_valid(
            &occ,
            QuoteStyle::Double,
            "s = '''Hello'''"
        ));
    }

    #[test]
    fn test_empty_literal_judged_on_delimiter_alone() {
        let occ = occurrence(Some(4), "");
        assert!(!quotes_are_valid(&occ, QuoteStyle::Single, "s = \"\""));
        assert!(quotes_are_valid(&occ, QuoteStyle::Double, "s = \"\""));
    }
}
