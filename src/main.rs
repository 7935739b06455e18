//! Entry point for the cleaning pipeline.
//!
//! The invocation surface takes no arguments: input, output and target are
//! load-time constants here, and the parameterized interface is the library's
//! [`PipelineConfig`]/[`Pipeline`] API.

use anyhow::{anyhow, Result};
use table_prep::{Pipeline, PipelineConfig, RunSummary};
use tracing::{error, info};

const INPUT_PATH: &str = "data/raw.csv";
const OUTPUT_PATH: &str = "data/processed.csv";
const TARGET_COLUMN: &str = "target";

/// Initialize the tracing subscriber for logging.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config = PipelineConfig::builder()
        .input_path(INPUT_PATH)
        .output_path(OUTPUT_PATH)
        .target_column(TARGET_COLUMN)
        .build()?;

    info!("Starting cleaning pipeline...");

    match Pipeline::new(config).run() {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed during {}: {}", e.stage().display_name(), e);
            Err(anyhow!("pipeline failed during {}: {}", e.stage().display_name(), e))
        }
    }
}

/// User-facing completion report. Uses `println!` intentionally: this output
/// should be visible regardless of log level settings.
fn print_summary(summary: &RunSummary) {
    println!("Preprocessing complete. File saved at: {}", summary.output_path.display());
    println!(
        "Final shape: {} rows x {} columns",
        summary.rows_after, summary.columns
    );
    println!(
        "Rows removed: {} missing, {} duplicate, {} outlier ({:.1}% of input)",
        summary.counts.missing_rows_removed,
        summary.counts.duplicate_rows_removed,
        summary.counts.outlier_rows_removed,
        summary.rows_removed_percentage()
    );
}
