//! The cleaning/scaling transform.
//!
//! Stages run in a fixed order; each stage's output set is the next stage's
//! population, so the order is load-bearing:
//!
//! 1. missing-value removal (whole table)
//! 2. duplicate removal (whole table)
//! 3. feature/target split
//! 4. IQR outlier removal (joint feature/target row filter)
//! 5. feature standardization
//! 6. reassembly with the raw target as the last column

use crate::cleaner::DataCleaner;
use crate::error::{PreprocessError, Result};
use crate::pipeline::outliers::OutlierFilter;
use crate::pipeline::scaler::StandardScaler;
use crate::types::StageCounts;
use crate::utils::is_numeric_dtype;
use polars::prelude::*;
use tracing::{debug, info};

/// Applies the five-stage cleaning/scaling transform to a table.
pub struct Preprocessor {
    target_column: String,
}

impl Preprocessor {
    pub fn new(target_column: impl Into<String>) -> Self {
        Self {
            target_column: target_column.into(),
        }
    }

    /// Transform a table: drop missing and duplicate rows, remove outlier
    /// rows, standardize the feature columns, and reattach the unchanged
    /// target values as the last column.
    ///
    /// The output has the same column set as the input (features first,
    /// target last) and never more rows.
    ///
    /// # Errors
    ///
    /// * [`PreprocessError::MissingTargetColumn`] if the configured target
    ///   column is absent.
    /// * [`PreprocessError::NonNumericFeature`] if a feature column has a
    ///   non-numeric dtype.
    /// * [`PreprocessError::ZeroVariance`] if a surviving feature column is
    ///   constant.
    pub fn process(&self, df: DataFrame) -> Result<(DataFrame, StageCounts)> {
        let mut counts = StageCounts::default();
        let cleaner = DataCleaner;

        // The target must exist before any rows are spent on cleaning.
        if df.column(&self.target_column).is_err() {
            return Err(PreprocessError::MissingTargetColumn(
                self.target_column.clone(),
            ));
        }

        info!("Step 1: Removing rows with missing values...");
        let (df, missing_removed) = cleaner.drop_missing(df)?;
        counts.missing_rows_removed = missing_removed;

        info!("Step 2: Removing duplicate rows...");
        let (df, duplicates_removed) = cleaner.drop_duplicates(df)?;
        counts.duplicate_rows_removed = duplicates_removed;

        info!("Step 3: Splitting features and target...");
        let (features, target) = self.split(df)?;

        info!("Step 4: Removing outlier rows (IQR rule)...");
        let (features, target, outliers_removed) = OutlierFilter::filter(&features, &target)?;
        counts.outlier_rows_removed = outliers_removed;

        info!("Step 5: Standardizing feature columns...");
        let features = StandardScaler::fit_transform(features)?;

        info!("Step 6: Reattaching target column...");
        let mut result = features;
        result.with_column(target)?;

        debug!(
            "Preprocessing complete: {} rows x {} columns",
            result.height(),
            result.width()
        );

        Ok((result, counts))
    }

    /// Partition the table into a Float64 feature table and the raw target
    /// series, index-aligned.
    fn split(&self, df: DataFrame) -> Result<(DataFrame, Series)> {
        let target = df
            .column(&self.target_column)?
            .as_materialized_series()
            .clone();

        let mut features = df.drop(&self.target_column)?;

        let feature_names: Vec<String> = features
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for name in &feature_names {
            let column = features.column(name)?;
            let dtype = column.dtype();
            if !is_numeric_dtype(dtype) {
                return Err(PreprocessError::NonNumericFeature {
                    column: name.clone(),
                    dtype: dtype.to_string(),
                });
            }

            let converted = column.cast(&DataType::Float64)?;
            features.replace(name, converted.take_materialized_series())?;
        }

        Ok((features, target))
    }
}
