//! Feature standardization (z-score scaling).
//!
//! Each feature column is transformed to `(v - mean) / std` using the
//! population standard deviation (ddof = 0) of the surviving rows. Parameters
//! are fitted on and applied to the same table in one pass.

use crate::error::{PreprocessError, Result};
use polars::prelude::*;
use tracing::debug;

/// Fitted scaling parameters for one feature column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnScale {
    pub mean: f64,
    pub std: f64,
}

/// Standardizes feature columns to zero mean and unit variance.
pub struct StandardScaler;

impl StandardScaler {
    /// Fit per-column mean and population standard deviation.
    ///
    /// # Errors
    ///
    /// * [`PreprocessError::NoValidValues`] if a column has no values to fit.
    /// * [`PreprocessError::ZeroVariance`] if a column is constant; a
    ///   zero-variance feature cannot be mapped to unit variance and is
    ///   rejected rather than silently zeroed.
    pub fn fit(features: &DataFrame) -> Result<Vec<(String, ColumnScale)>> {
        let mut scales = Vec::with_capacity(features.width());

        for col in features.get_columns() {
            let series = col.as_materialized_series();
            let name = series.name().to_string();
            let values = series.f64()?;

            let mean = values
                .mean()
                .ok_or_else(|| PreprocessError::NoValidValues(name.clone()))?;
            let std = values
                .std(0)
                .ok_or_else(|| PreprocessError::NoValidValues(name.clone()))?;

            if std == 0.0 {
                return Err(PreprocessError::ZeroVariance(name));
            }

            scales.push((name, ColumnScale { mean, std }));
        }

        Ok(scales)
    }

    /// Replace every value `v` with `(v - mean) / std` per column.
    pub fn transform(mut features: DataFrame, scales: &[(String, ColumnScale)]) -> Result<DataFrame> {
        for (name, scale) in scales {
            let series = features.column(name)?.as_materialized_series();
            let scaled = series
                .f64()?
                .apply(|v| v.map(|val| (val - scale.mean) / scale.std))
                .into_series();
            features.replace(name, scaled)?;
        }

        debug!("Standardized {} feature columns", scales.len());
        Ok(features)
    }

    /// Fit on `features` and apply the fitted parameters to the same table.
    pub fn fit_transform(features: DataFrame) -> Result<DataFrame> {
        let scales = Self::fit(&features)?;
        Self::transform(features, &scales)
    }
}
