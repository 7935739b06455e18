//! Error types for the cleaning pipeline.
//!
//! One `thiserror` hierarchy covers the whole run. Every variant belongs to
//! exactly one pipeline stage, so a failure can always be reported as
//! "failed while loading/preprocessing/writing" without the caller inspecting
//! variant internals.

use std::path::PathBuf;
use thiserror::Error;

/// The pipeline stage an error originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Reading the input file into a table.
    Load,
    /// The in-memory cleaning and scaling transform.
    Preprocess,
    /// Serializing the result table to disk.
    Write,
}

impl PipelineStage {
    /// Human-readable stage name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Preprocess => "preprocess",
            Self::Write => "write",
        }
    }
}

/// The main error type for the cleaning pipeline.
#[derive(Error, Debug)]
pub enum PreprocessError {
    /// Input file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file exists but is not well-formed delimited text
    /// (e.g. a row with a field count inconsistent with the header).
    #[error("failed to parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The configured target column is absent from the table.
    #[error("target column '{0}' not found in dataset")]
    MissingTargetColumn(String),

    /// A feature column has a non-numeric dtype.
    #[error("feature column '{column}' is not numeric (dtype: {dtype})")]
    NonNumericFeature { column: String, dtype: String },

    /// A feature column has zero variance over the surviving rows, so it
    /// cannot be standardized.
    #[error("feature column '{0}' has zero variance and cannot be standardized")]
    ZeroVariance(String),

    /// No valid values found in a column for computation.
    #[error("no valid values found in column '{0}'")]
    NoValidValues(String),

    /// Destination directory for the output file does not exist.
    #[error("output directory not found: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl PreprocessError {
    /// The stage this error belongs to.
    ///
    /// IO errors can only arise while writing (the loader goes through the
    /// CSV reader and surfaces `Parse` instead); polars errors outside the
    /// loader arise from in-memory table operations.
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::InputNotFound(_) | Self::Parse { .. } => PipelineStage::Load,
            Self::MissingTargetColumn(_)
            | Self::NonNumericFeature { .. }
            | Self::ZeroVariance(_)
            | Self::NoValidValues(_)
            | Self::Polars(_) => PipelineStage::Preprocess,
            Self::OutputDirNotFound(_) | Self::Io(_) => PipelineStage::Write,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PreprocessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_classification() {
        assert_eq!(
            PreprocessError::InputNotFound(PathBuf::from("x.csv")).stage(),
            PipelineStage::Load
        );
        assert_eq!(
            PreprocessError::MissingTargetColumn("target".to_string()).stage(),
            PipelineStage::Preprocess
        );
        assert_eq!(
            PreprocessError::OutputDirNotFound(PathBuf::from("out")).stage(),
            PipelineStage::Write
        );
        assert_eq!(
            PreprocessError::ZeroVariance("f1".to_string()).stage(),
            PipelineStage::Preprocess
        );
    }

    #[test]
    fn test_display_names_match_stages() {
        assert_eq!(PipelineStage::Load.display_name(), "load");
        assert_eq!(PipelineStage::Preprocess.display_name(), "preprocess");
        assert_eq!(PipelineStage::Write.display_name(), "write");
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = PreprocessError::MissingTargetColumn("quality".to_string());
        assert!(err.to_string().contains("quality"));

        let err = PreprocessError::NonNumericFeature {
            column: "city".to_string(),
            dtype: "str".to_string(),
        };
        assert!(err.to_string().contains("city"));
        assert!(err.to_string().contains("str"));
    }
}
