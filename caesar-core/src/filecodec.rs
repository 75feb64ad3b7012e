//! Whole-file shift transform, line for line
//!
//! The input is split with its line terminators preserved and each segment
//! is run through the raw shift. Terminators are control characters and
//! pass through unchanged, so the output has exactly the input's line
//! structure. The output file is written to a sibling temp file and renamed
//! into place, so a failed run never leaves a half-written output behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{CaesarError, Result};
use crate::history::OperationKind;
use crate::shift;

/// Transforms `input_path` into `output_path` under the given key.
///
/// # Arguments
///
/// * `input_path` - File to read; must exist and be valid UTF-8 text.
/// * `output_path` - Destination; overwritten on success.
/// * `key` - Shift value in `-255..=255`.
/// * `direction` - Whether to encrypt or decrypt each line.
///
/// # Returns
///
/// The number of lines processed, or `InvalidKey` / `FileRead` /
/// `FileWrite` on failure.
pub fn process_file(
    input_path: &Path,
    output_path: &Path,
    key: i32,
    direction: OperationKind,
) -> Result<usize> {
    let offset: u8 = shift::validate_key(key)?;
    let offset: u8 = match direction {
        OperationKind::Encrypt => offset,
        OperationKind::Decrypt => offset.wrapping_neg(),
    };

    let content: String =
        std::fs::read_to_string(input_path).map_err(|source| CaesarError::FileRead {
            path: input_path.to_path_buf(),
            source,
        })?;

    let mut lines: usize = 0;
    let mut transformed: String = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        transformed.push_str(&shift::shift_text(line, offset));
        lines += 1;
    }

    write_atomic(output_path, &transformed)?;
    debug!(lines, input = %input_path.display(), output = %output_path.display(), "processed file");
    Ok(lines)
}

/// Writes `content` to a temp file next to `path`, then renames it over
/// `path` on success.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let map_err = |source: std::io::Error| CaesarError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp: NamedTempFile = NamedTempFile::new_in(dir).map_err(map_err)?;
    tmp.write_all(content.as_bytes()).map_err(map_err)?;
    tmp.persist(path).map_err(|err| CaesarError::FileWrite {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
