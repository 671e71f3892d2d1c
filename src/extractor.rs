//! Run orchestration: provision the output directory, load the dump, run
//! the extraction scan, and report the outcome.

use crate::cli::OutputFormatArg;
use crate::summary::RunSummary;
use crate::{fatal_error, output_dir, parser};
use std::fs;
use std::io;
use std::path::Path;

/// Read the whole input file, returning its text and its size in bytes.
///
/// The dump is read as raw bytes and converted to UTF-8 lossily: a stray
/// byte inside a dumped function body must not abort the run.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be read.
pub fn read_input(path: &Path) -> io::Result<(String, usize)> {
    let bytes = fs::read(path)?;
    let size = bytes.len();
    Ok((String::from_utf8_lossy(&bytes).into_owned(), size))
}

/// Provision, scan, and report one extraction run.
///
/// Fatal conditions (unprovisionable output directory, unreadable input)
/// terminate the process with a diagnostic naming the offending path.
/// Per-function write failures are reported on stderr after the scan and
/// the process still exits 0.
pub fn run(input_path: &Path, output_root: &Path, format: OutputFormatArg) {
    let out_dir = output_dir::dir_for(input_path, output_root);

    if let Err(e) = output_dir::provision(&out_dir) {
        fatal_error(&format!(
            "Could not provision output directory '{}': {}",
            out_dir.display(),
            e
        ));
    }

    let (text, input_bytes) = match read_input(input_path) {
        Ok(loaded) => loaded,
        Err(e) => fatal_error(&format!(
            "Could not read input file '{}': {}",
            input_path.display(),
            e
        )),
    };

    if !format.is_json() {
        println!(
            "Parsing {} bytes from '{}' into output path '{}'.",
            input_bytes,
            input_path.display(),
            out_dir.display()
        );
    }

    let extraction = parser::extract(&text, &out_dir);
    let summary = RunSummary::from_extraction(input_path, input_bytes, &out_dir, extraction);

    for failure in &summary.failures {
        eprintln!(
            "Could not write function '{}': {}",
            failure.function, failure.reason
        );
    }

    if format.is_json() {
        println!("{}", summary.to_json());
    } else {
        println!(
            "Finished: {} function(s) extracted into '{}'.",
            summary.functions.len(),
            out_dir.display()
        );
        if summary.orphan_lines > 0 {
            println!(
                "Note: {} body line(s) had no open function and were ignored.",
                summary.orphan_lines
            );
        }
    }
}

/// Print the function names found in the dump, one per line, without
/// writing anything to the filesystem.
pub fn list(input_path: &Path) {
    let (text, _) = match read_input(input_path) {
        Ok(loaded) => loaded,
        Err(e) => fatal_error(&format!(
            "Could not read input file '{}': {}",
            input_path.display(),
            e
        )),
    };

    for name in parser::function_names(&text) {
        println!("{name}");
    }
}
