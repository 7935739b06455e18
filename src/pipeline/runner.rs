//! The pipeline runner: load, transform, write.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::Preprocessor;
use crate::types::RunSummary;
use crate::{loader, writer};
use tracing::info;

/// One configured end-to-end run over a delimited file.
///
/// Control flow is strictly linear: read the input table, apply the
/// cleaning/scaling transform, write the result. No stage recovers from its
/// own errors; the first failure aborts the run.
///
/// # Example
///
/// ```rust,ignore
/// use table_prep::{Pipeline, PipelineConfig};
///
/// let config = PipelineConfig::builder()
///     .input_path("data/raw.csv")
///     .output_path("data/processed.csv")
///     .target_column("target")
///     .build()?;
///
/// let summary = Pipeline::new(config).run()?;
/// println!("{} -> {} rows", summary.rows_before, summary.rows_after);
/// ```
pub struct Pipeline {
    config: PipelineConfig,
}

// Callers may move a run onto a worker thread.
static_assertions::assert_impl_all!(Pipeline: Send);

impl Pipeline {
    /// Create a pipeline from a validated configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Execute the run and return its summary.
    pub fn run(&self) -> Result<RunSummary> {
        info!("Loading dataset from: {}", self.config.input_path.display());
        let df = loader::read_table(&self.config.input_path, self.config.delimiter)?;
        let rows_before = df.height();

        let preprocessor = Preprocessor::new(self.config.target_column.as_str());
        let (mut df, counts) = preprocessor.process(df)?;

        writer::write_table(&mut df, &self.config.output_path, self.config.delimiter)?;

        Ok(RunSummary {
            rows_before,
            rows_after: df.height(),
            columns: df.width(),
            counts,
            output_path: self.config.output_path.clone(),
        })
    }
}
