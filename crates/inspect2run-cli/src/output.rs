//! Output blocks written to standard output.
//!
//! Every source produces one block. With several files each block is
//! headed by `File: <basename>` and blocks are separated by a blank line.

use std::io::{self, Write};
use std::path::Path;

use inspect2run_common::constants::BIN_NAME;

/// Writes a translated command, optionally headed by its file name.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_block(out: &mut impl Write, source: Option<&Path>, command: &str) -> io::Result<()> {
    if let Some(path) = source {
        writeln!(out, "File: {}", file_label(path))?;
    }
    writeln!(out, "{command}")
}

/// Writes the blank line between two file blocks.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)
}

/// Writes a one-line error report.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_error(
    out: &mut impl Write,
    context: &str,
    err: &dyn std::error::Error,
) -> io::Result<()> {
    writeln!(out, "{context}: {err}")
}

/// Writes the usage hint shown when there is nothing to translate.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "{BIN_NAME} [--format] docker_inspect_of_a_container.json... OR")?;
    writeln!(out, "docker inspect <container> | {BIN_NAME} [--format]")
}

/// Returns the last path component, or the whole path if there is none.
fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
