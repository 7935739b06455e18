//! Outlier removal using the interquartile-range rule.
//!
//! Bounds are computed once per feature column from the pre-filter
//! population, then a single row mask is applied to the feature table and
//! the target series together, so the two can never drift out of alignment.

use crate::error::{PreprocessError, Result};
use polars::prelude::*;
use tracing::debug;

/// Multiplier applied to the IQR when computing the acceptance bounds.
const IQR_MULTIPLIER: f64 = 1.5;

/// Per-column acceptance interval derived from Q1/Q3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Whether a value lies inside the closed interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Removes rows whose feature values fall outside their column's IQR bounds.
pub struct OutlierFilter;

impl OutlierFilter {
    /// Compute `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` for one feature column.
    pub fn column_bounds(name: &str, values: &Float64Chunked) -> Result<IqrBounds> {
        let mut sorted: Vec<f64> = values.into_iter().flatten().collect();
        if sorted.is_empty() {
            return Err(PreprocessError::NoValidValues(name.to_string()));
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = interpolated_quantile(&sorted, 0.25);
        let q3 = interpolated_quantile(&sorted, 0.75);
        let iqr = q3 - q1;

        Ok(IqrBounds {
            lower: q1 - IQR_MULTIPLIER * iqr,
            upper: q3 + IQR_MULTIPLIER * iqr,
        })
    }

    /// Filter `features` and `target` by one combined mask: a row survives
    /// only if every feature value lies within that column's bounds.
    ///
    /// Returns the filtered pair and the number of rows removed.
    pub fn filter(features: &DataFrame, target: &Series) -> Result<(DataFrame, Series, usize)> {
        let height = features.height();
        if height == 0 {
            return Ok((features.clone(), target.clone(), 0));
        }

        let mut survivors = vec![true; height];

        for col in features.get_columns() {
            let series = col.as_materialized_series();
            let values = series.f64()?;
            let bounds = Self::column_bounds(series.name(), values)?;

            for (i, opt_val) in values.into_iter().enumerate() {
                if let Some(val) = opt_val {
                    survivors[i] = survivors[i] && bounds.contains(val);
                }
            }
        }

        let mask = BooleanChunked::from_slice("mask".into(), &survivors);
        let filtered_features = features.filter(&mask)?;
        let filtered_target = target.filter(&mask)?;
        let removed = height - filtered_features.height();

        if removed > 0 {
            debug!("Removed {} rows containing outliers", removed);
        }

        Ok((filtered_features, filtered_target, removed))
    }
}

/// Quantile of a sorted slice with linear interpolation at `(n - 1) * q`.
fn interpolated_quantile(sorted: &[f64], q: f64) -> f64 {
    let idx = q * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let frac = idx - lower as f64;

    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}
