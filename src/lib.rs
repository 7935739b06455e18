//! Batch CSV cleaning pipeline.
//!
//! Loads a comma-separated dataset, removes missing and duplicate records,
//! strips statistical outliers from the feature columns using the
//! interquartile-range rule, standardizes the remaining feature columns to
//! zero mean / unit variance, reattaches the unchanged target column, and
//! writes the result to a new comma-separated file.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use table_prep::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::builder()
//!     .input_path("data/raw.csv")
//!     .output_path("data/processed.csv")
//!     .target_column("target")
//!     .build()?;
//!
//! let summary = Pipeline::new(config).run()?;
//!
//! println!(
//!     "Wrote {} rows x {} columns to {}",
//!     summary.rows_after,
//!     summary.columns,
//!     summary.output_path.display()
//! );
//! ```
//!
//! # Transform semantics
//!
//! The [`Preprocessor`] runs a fixed stage order: missing-value rows are
//! dropped, exact duplicates are dropped (first occurrence kept), per-column
//! IQR bounds computed from the surviving population remove outlier rows,
//! and the features are z-score standardized over what remains. The target
//! column is never scaled or outlier-scanned; it is filtered only by the row
//! masks the feature columns produce, so feature/target pairing is preserved
//! end to end.
//!
//! The whole table is materialized in memory for the duration of the run;
//! there is no streaming mode.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod types;
pub mod utils;
pub mod writer;

pub use cleaner::DataCleaner;
pub use config::{ConfigValidationError, PipelineConfig, PipelineConfigBuilder};
pub use error::{PipelineStage, PreprocessError, Result};
pub use pipeline::{
    ColumnScale, IqrBounds, OutlierFilter, Pipeline, Preprocessor, StandardScaler,
};
pub use types::{RunSummary, StageCounts};
