//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the argument surface can be
//! unit-tested alongside the rest of the library.

use crate::extractor;
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the fnsplit tool.
#[derive(ClapParser)]
#[command(name = "fnsplit")]
#[command(version = PKG_VERSION)]
#[command(about = "Split a `declare -f` dump into one script per function", long_about = None)]
struct Cli {
    /// Path to the function dump (e.g. the output of `declare -f`)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// List the functions found in the dump without writing any files
    #[arg(short, long)]
    list: bool,

    /// Directory beneath which the output directory is created
    #[arg(long, value_name = "PATH", default_value = ".")]
    output_root: PathBuf,

    /// Output format for the run report (stream, json)
    #[arg(long, value_name = "FORMAT", default_value = "stream")]
    output_format: OutputFormatArg,
}

/// Output format for the completed-run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable progress lines on stdout (default)
    Stream,
    /// A machine-readable JSON summary on stdout
    Json,
}

impl OutputFormatArg {
    /// Whether the run should emit a serialized summary instead of
    /// streaming progress lines.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Main CLI logic that can be called from external wrappers.
pub fn run_cli() {
    let cli = Cli::parse();

    // Handle --list flag
    if cli.list {
        extractor::list(&cli.input);
        return;
    }

    extractor::run(&cli.input, &cli.output_root, cli.output_format);
}
