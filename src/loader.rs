//! Delimited-text loading.

use crate::error::{PreprocessError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// How many leading records the reader inspects to infer column dtypes.
const INFER_SCHEMA_LENGTH: usize = 100;

/// Read a delimited file into a table.
///
/// Column names come from the first line; values are parsed to numeric
/// dtypes where a column's content is numeric (locale-independent, `.` as
/// the decimal separator), and empty fields become nulls.
///
/// # Errors
///
/// * [`PreprocessError::InputNotFound`] if `path` does not exist.
/// * [`PreprocessError::Parse`] if the content is not well-formed, including
///   rows whose field count disagrees with the header.
pub fn read_table(path: &Path, delimiter: u8) -> Result<DataFrame> {
    if !path.exists() {
        return Err(PreprocessError::InputNotFound(path.to_path_buf()));
    }

    let parse_options = CsvParseOptions::default()
        .with_separator(delimiter)
        .with_quote_char(Some(b'"'));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_LENGTH))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| PreprocessError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| PreprocessError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}
