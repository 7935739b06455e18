//! Result and summary types returned by the pipeline.

use serde::Serialize;
use std::path::PathBuf;

/// Per-stage row-removal counts produced by the preprocessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    /// Rows dropped because a value was missing in any column.
    pub missing_rows_removed: usize,
    /// Rows dropped as exact duplicates of an earlier row.
    pub duplicate_rows_removed: usize,
    /// Rows dropped because a feature value fell outside its IQR bounds.
    pub outlier_rows_removed: usize,
}

impl StageCounts {
    /// Total rows removed across all stages.
    pub fn total_removed(&self) -> usize {
        self.missing_rows_removed + self.duplicate_rows_removed + self.outlier_rows_removed
    }
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Rows in the loaded table.
    pub rows_before: usize,
    /// Rows in the written table.
    pub rows_after: usize,
    /// Columns in the written table (equal to the input column count).
    pub columns: usize,
    /// Row-removal counts by stage.
    pub counts: StageCounts,
    /// Where the cleaned table was written.
    pub output_path: PathBuf,
}

impl RunSummary {
    /// Percentage of input rows removed by the run.
    pub fn rows_removed_percentage(&self) -> f64 {
        if self.rows_before == 0 {
            return 0.0;
        }
        (self.rows_before - self.rows_after) as f64 / self.rows_before as f64 * 100.0
    }
}
