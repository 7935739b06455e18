//! Delimited-text output.

use crate::error::{PreprocessError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialize a table to a delimited file: header row first, one data row per
/// table row, creating or overwriting the destination file.
///
/// The table is first written to a temporary sibling path and renamed into
/// place, so a failure mid-write never leaves a truncated file at `path`.
/// Parent directories are not created.
///
/// # Errors
///
/// [`PreprocessError::OutputDirNotFound`] if the destination directory does
/// not exist.
pub fn write_table(df: &mut DataFrame, path: &Path, delimiter: u8) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            return Err(PreprocessError::OutputDirNotFound(dir.to_path_buf()));
        }
    }

    let tmp_path = temp_sibling(path);
    let write_result = write_to(df, &tmp_path, delimiter);

    if let Err(e) = write_result {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e);
    }

    std::fs::rename(&tmp_path, path)?;
    info!(
        "Dataset saved: {} ({} rows x {} columns)",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(())
}

fn write_to(df: &mut DataFrame, path: &Path, delimiter: u8) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(delimiter)
        .with_quote_char(b'"')
        .finish(df)?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}
