//! Filesystem helpers for writing pipeline artifacts

use crate::error::{PrepareError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Reject paths that cannot name an output file
pub fn validate_output_path(path: &Path) -> Result<()> {
    let text = path.as_os_str();
    if text.is_empty() {
        return Err(PrepareError::InvalidArgument("output path is empty".to_string()));
    }
    if path.file_name().is_none() {
        return Err(PrepareError::InvalidArgument(format!(
            "output path {} does not name a file",
            path.display()
        )));
    }
    Ok(())
}

/// Create every missing parent directory of `path`. Existing directories are fine.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| PrepareError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Truncate-or-create `path` and write `contents` in full.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let to_write_error = |source| PrepareError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;
    Ok(())
}
