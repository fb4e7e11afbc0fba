//! Collection file reading
//!
//! Rejects non-regular files and enforces a size limit before reading, so a
//! FIFO or a runaway export cannot hang or exhaust the linter.

use crate::diagnostics::{LintError, LintResult};
use std::fs;
use std::path::Path;

/// Default maximum collection size (32 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Read a collection file with the default size limit.
pub fn read_collection_file(path: &Path) -> LintResult<String> {
    read_collection_file_with_limit(path, DEFAULT_MAX_FILE_SIZE)
}

/// Read a collection file, rejecting files larger than `max_size` bytes.
///
/// Files at exactly `max_size` bytes are accepted.
pub fn read_collection_file_with_limit(path: &Path, max_size: u64) -> LintResult<String> {
    let metadata = fs::metadata(path).map_err(|e| LintError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !metadata.is_file() {
        return Err(LintError::FileNotRegular {
            path: path.to_path_buf(),
        });
    }

    let size = metadata.len();
    if size > max_size {
        return Err(LintError::FileTooBig {
            path: path.to_path_buf(),
            size,
            limit: max_size,
        });
    }

    fs::read_to_string(path).map_err(|e| LintError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
