//! Pipeline module.
//!
//! This module provides the pipeline runner and the transform stages it
//! composes.

pub mod outliers;
mod preprocessor;
mod runner;
pub mod scaler;

pub use outliers::{IqrBounds, OutlierFilter};
pub use preprocessor::Preprocessor;
pub use runner::Pipeline;
pub use scaler::{ColumnScale, StandardScaler};
