//! Data model for the outcome of one extraction run.

use serde::Serialize;
use std::path::Path;

/// A per-function write failure collected during the scan.
///
/// These are reportable but non-fatal: the scan keeps going and the
/// collected failures are surfaced together at the end of the run.
#[derive(Debug, Clone, Serialize)]
pub struct WriteFailure {
    /// Name of the function whose file could not be written
    pub function: String,

    /// Operating-system error text
    pub reason: String,
}

/// Outcome of a single forward scan over the dump text.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Functions whose output file was opened, in input order
    pub functions: Vec<String>,

    /// Body lines dropped because no function file was open (before the
    /// first header, or after a write failure cleared the target)
    pub orphan_lines: usize,

    /// Write failures collected while scanning
    pub failures: Vec<WriteFailure>,
}

/// Complete summary of a finished run, serializable for
/// `--output-format json`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Path of the dump that was parsed
    pub input: String,

    /// Size of the dump in bytes
    pub input_bytes: usize,

    /// Directory the function files were written into
    pub output_dir: String,

    /// Names of the extracted functions, sorted
    pub functions: Vec<String>,

    /// Body lines dropped because no function file was open
    pub orphan_lines: usize,

    /// Per-function write failures
    pub failures: Vec<WriteFailure>,

    /// True when every recognized function was written without error
    pub success: bool,
}

impl RunSummary {
    /// Build a summary from a finished extraction.
    #[must_use]
    pub fn from_extraction(
        input: &Path,
        input_bytes: usize,
        output_dir: &Path,
        extraction: Extraction,
    ) -> Self {
        let Extraction {
            mut functions,
            orphan_lines,
            failures,
        } = extraction;

        // A duplicate header reopens the same file, so the name can appear
        // twice in input order; the summary reports distinct files.
        functions.sort();
        functions.dedup();

        Self {
            input: input.display().to_string(),
            input_bytes,
            output_dir: output_dir.display().to_string(),
            functions,
            orphan_lines,
            success: failures.is_empty(),
            failures,
        }
    }

    /// Format as JSON for programmatic consumption
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample_extraction() -> Extraction {
        Extraction {
            functions: vec!["greet".to_string(), "farewell".to_string()],
            orphan_lines: 1,
            failures: vec![],
        }
    }

    #[test]
    fn test_summary_sorts_and_dedups_function_names() {
        let mut extraction = sample_extraction();
        extraction.functions.push("greet".to_string());

        let summary = RunSummary::from_extraction(
            Path::new("dump.txt"),
            42,
            Path::new("fn_output_dump.txt"),
            extraction,
        );

        assert_eq!(summary.functions, vec!["farewell", "greet"]);
    }

    #[test]
    fn test_summary_success_tracks_failures() {
        let clean = RunSummary::from_extraction(
            Path::new("dump.txt"),
            42,
            Path::new("out"),
            sample_extraction(),
        );
        assert!(clean.success);

        let mut extraction = sample_extraction();
        extraction.failures.push(WriteFailure {
            function: "greet".to_string(),
            reason: "permission denied".to_string(),
        });
        let failed =
            RunSummary::from_extraction(Path::new("dump.txt"), 42, Path::new("out"), extraction);
        assert!(!failed.success);
    }

    #[test]
    fn test_to_json_contains_fields() {
        let summary = RunSummary::from_extraction(
            Path::new("dump.txt"),
            42,
            Path::new("fn_output_dump.txt"),
            sample_extraction(),
        );
        let json = summary.to_json();

        assert!(json.contains("\"input_bytes\": 42"));
        assert!(json.contains("\"greet\""));
        assert!(json.contains("\"success\": true"));

        // The output must be valid JSON end to end.
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["orphan_lines"], 1);
    }
}
