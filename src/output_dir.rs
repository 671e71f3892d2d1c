//! Output directory provisioning.
//!
//! The output directory is named after the input file and recreated from
//! scratch on every run: stale contents of a previous run are removed
//! wholesale, so callers must treat the directory as disposable. Function
//! files are created inside it with the executable bit set so they can go
//! straight onto the PATH.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Fixed prefix for generated output directories.
pub const OUTPUT_DIR_PREFIX: &str = "fn_output_";

/// Compute the output directory for `input`: the fixed prefix plus the
/// input's final path segment, beneath `output_root`.
#[must_use]
pub fn dir_for(input: &Path, output_root: &Path) -> PathBuf {
    let basename = input
        .file_name()
        .map_or_else(|| input.to_string_lossy(), |name| name.to_string_lossy());
    output_root.join(format!("{OUTPUT_DIR_PREFIX}{basename}"))
}

/// Ensure a clean, writable directory exists at `dir`.
///
/// Creation is attempted once; on conflict whatever occupies the path is
/// recursively removed and creation is retried a single time.
///
/// # Errors
///
/// Returns the underlying I/O error when the removal fails or the retried
/// creation fails; the caller treats this as fatal.
pub fn provision(dir: &Path) -> io::Result<()> {
    if fs::create_dir(dir).is_ok() {
        return Ok(());
    }

    // A previous run (or anything else) is in the way: clear it and retry.
    if let Err(e) = fs::remove_dir_all(dir) {
        if e.kind() != io::ErrorKind::NotFound {
            return Err(e);
        }
    }
    fs::create_dir(dir)
}

/// Create (or truncate) the output file for one function.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be created or
/// its permissions cannot be set.
pub fn create_function_file(dir: &Path, name: &str) -> io::Result<File> {
    let path = dir.join(name);
    let file = File::create(&path)?;

    // Extracted functions are meant to be invoked directly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(file)
}
