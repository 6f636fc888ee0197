//! Quote delimiter model.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// A recognized Python string quote delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `'`
    Single,
    /// `"`
    Double,
    /// `'''`
    TripleSingle,
    /// `"""`
    TripleDouble,
}

impl QuoteStyle {
    /// Returns the delimiter as source text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            QuoteStyle::Single => "'",
            QuoteStyle::Double => "\"",
            QuoteStyle::TripleSingle => "'''",
            QuoteStyle::TripleDouble => "\"\"\"",
        }
    }

    /// Returns the delimiter built from the other quote character.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            QuoteStyle::Single => QuoteStyle::Double,
            QuoteStyle::Double => QuoteStyle::Single,
            QuoteStyle::TripleSingle => QuoteStyle::TripleDouble,
            QuoteStyle::TripleDouble => QuoteStyle::TripleSingle,
        }
    }

    /// Maps an opening quote character to its single-character style.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteStyle::Single),
            '"' => Some(QuoteStyle::Double),
            _ => None,
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The enforced quote preference.
///
/// Exactly two values are recognized, both on the command line and in the
/// configuration file; triple-quoted delimiters are never a preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PreferredQuote {
    /// Prefer `'`-quoted literals (consistent with `repr()`).
    #[default]
    Single,
    /// Prefer `"`-quoted literals.
    Double,
}

impl PreferredQuote {
    /// Returns the delimiter this preference enforces.
    #[must_use]
    pub const fn style(self) -> QuoteStyle {
        match self {
            PreferredQuote::Single => QuoteStyle::Single,
            PreferredQuote::Double => QuoteStyle::Double,
        }
    }
}
