//! Command line interface definition.

use crate::quotes::PreferredQuote;
use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.stringquotes.toml or pyproject.toml):
  Create this file in your project root to set defaults.

  [stringquotes]              # [tool.stringquotes] in pyproject.toml
  string-quotes = \"single\"    # or \"double\"

  The --string-quotes flag overrides the file. Append `# noqa` to a line
  to exempt it from diagnostics.
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stringquotes - PEP-8 string quote consistency checker for Python",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Paths to check (files or directories).
    /// When no paths are provided, defaults to the current directory.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// String quoting style to enforce (overrides the configuration file).
    #[arg(long, value_enum)]
    pub string_quotes: Option<PreferredQuote>,

    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,
}
