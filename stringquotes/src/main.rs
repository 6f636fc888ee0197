//! Binary entry point for the `stringquotes` checker.
//!
//! Delegates to the shared `entry_point::run_with_args()` function so the
//! CLI and tests exercise identical behavior.

use anyhow::Result;

fn main() -> Result<()> {
    let code = stringquotes::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
