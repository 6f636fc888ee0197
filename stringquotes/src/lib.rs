//! `stringquotes` - PEP-8 string quote consistency checker for Python.
//!
//! Reports every string or bytes literal whose quote character disagrees
//! with the configured preference without a reason to: multi-line and
//! triple-quoted literals are exempt, as are literals whose content contains
//! the opposite quote (switching them would force escaping) and lines
//! carrying a `# noqa` comment.
//!
//! The library surface is host-agnostic: an embedding linter can parse a
//! file with `ruff_python_parser`, hand the module to
//! [`checker::StringChecker::run`], and receive ordered diagnostics. The
//! bundled CLI in [`entry_point`] is one such host.

pub mod checker;
pub mod cli;
pub mod config;
pub mod entry_point;
pub mod output;
pub mod quotes;
pub mod utils;
