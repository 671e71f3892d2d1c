//! # fnsplit
//!
//! Split the output of bash's `declare -f` into standalone scripts, one
//! executable file per function, so that reusable shell functions can live
//! on the system PATH instead of inside a profile or dotfile.
//!
//! ## Usage
//!
//! - Extract functions: `fnsplit functions.txt`
//! - List functions without writing files: `fnsplit --list functions.txt`
//!
//! See README.md for more details and examples.

/// Entry point for the CLI tool.
fn main() {
    fnsplit::cli::run_cli();
}
