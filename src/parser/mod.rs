//! The function-extraction scan.
//!
//! A single forward pass over the dump text. Each line is classified by
//! [`line::classify`]; a header opens a fresh output file which stays the
//! sole write target until the next header supersedes it, delimiter lines
//! are discarded, and body lines are appended to whatever target is
//! active.

pub mod line;

use crate::output_dir;
use crate::summary::{Extraction, WriteFailure};
use self::line::LineKind;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The currently open function file: the single write target of the scan.
struct ActiveFunction {
    name: String,
    file: File,
}

/// State for one pass over a dump.
struct Scan<'a> {
    out_dir: &'a Path,
    /// "No active target" is a defined state, not an error: body lines
    /// arriving while this is `None` are counted and dropped.
    active: Option<ActiveFunction>,
    outcome: Extraction,
}

impl<'a> Scan<'a> {
    fn new(out_dir: &'a Path) -> Self {
        Self {
            out_dir,
            active: None,
            outcome: Extraction::default(),
        }
    }

    /// Open (or truncate) the output file for `name` and make it the
    /// active target, superseding whatever was active before.
    fn open_function(&mut self, name: &str) {
        match output_dir::create_function_file(self.out_dir, name) {
            Ok(file) => {
                self.outcome.functions.push(name.to_string());
                self.active = Some(ActiveFunction {
                    name: name.to_string(),
                    file,
                });
            }
            Err(e) => {
                self.record_failure(name, &e);
                self.active = None;
            }
        }
    }

    /// Append one body line (plus its newline) to the active target, or
    /// count it as an orphan when no function is open yet.
    fn append_body(&mut self, text: &str) {
        let Some(active) = self.active.as_mut() else {
            self.outcome.orphan_lines += 1;
            return;
        };

        let written = active
            .file
            .write_all(text.as_bytes())
            .and_then(|()| active.file.write_all(b"\n"));

        if let Err(e) = written {
            // The failure is on record; later body lines for this
            // function have nowhere to go until the next header.
            let name = active.name.clone();
            self.active = None;
            self.record_failure(&name, &e);
        }
    }

    fn record_failure(&mut self, name: &str, error: &std::io::Error) {
        self.outcome.failures.push(WriteFailure {
            function: name.to_string(),
            reason: error.to_string(),
        });
    }
}

/// Run the extraction scan over `input`, writing one file per recognized
/// function into `out_dir`.
///
/// The scan never fails as a whole: malformed or empty input degrades to
/// zero artifacts, and per-function write failures are collected in the
/// returned [`Extraction`] while the pass continues. A final line with no
/// terminating newline is processed like any other line.
pub fn extract(input: &str, out_dir: &Path) -> Extraction {
    let mut scan = Scan::new(out_dir);

    for text in input.lines() {
        match line::classify(text) {
            LineKind::Header(name) => scan.open_function(name),
            LineKind::Delimiter => {}
            LineKind::Body(body) => scan.append_body(body),
        }
    }

    scan.outcome
}

/// Scan the dump for function headers only, without touching the
/// filesystem. Returns the distinct names, sorted.
#[must_use]
pub fn function_names(input: &str) -> Vec<String> {
    let mut names: Vec<String> = input
        .lines()
        .filter_map(line::header_name)
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}
