//! Row-level cleaning: missing-value removal and duplicate removal.
//!
//! Both operations act on the whole table (features and target together), so
//! the feature/target pairing of every surviving row is untouched by
//! construction.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Cleaner for the row-removal stages of the pipeline.
pub struct DataCleaner;

impl DataCleaner {
    /// Drop every row containing a missing value in any column.
    ///
    /// Returns the filtered table and the number of rows removed.
    pub fn drop_missing(&self, df: DataFrame) -> Result<(DataFrame, usize)> {
        let before = df.height();

        let mut survivors = vec![true; before];
        for col in df.get_columns() {
            let null_mask = col.as_materialized_series().is_null();
            for (i, is_null) in null_mask.into_iter().enumerate() {
                if is_null.unwrap_or(false) {
                    survivors[i] = false;
                }
            }
        }

        let mask = BooleanChunked::from_slice("mask".into(), &survivors);
        let df = df.filter(&mask)?;
        let removed = before - df.height();

        if removed > 0 {
            debug!("Removed {} rows with missing values", removed);
        } else {
            debug!("No rows with missing values found");
        }

        Ok((df, removed))
    }

    /// Drop rows that exactly duplicate an earlier row across all columns.
    ///
    /// The first occurrence, in original row order, is kept; row order of
    /// survivors is preserved.
    pub fn drop_duplicates(&self, df: DataFrame) -> Result<(DataFrame, usize)> {
        let before = df.height();
        let df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        let removed = before - df.height();

        if removed > 0 {
            let pct = removed as f64 / before as f64 * 100.0;
            debug!("Removed {} duplicate rows ({:.1}%)", removed, pct);
        } else {
            debug!("No duplicate rows found");
        }

        Ok((df, removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_missing_removes_rows_with_any_null() {
        let df = df![
            "f1" => [Some(1.0), None, Some(3.0)],
            "target" => [Some(10.0), Some(20.0), None],
        ]
        .unwrap();

        let (cleaned, removed) = DataCleaner.drop_missing(df).unwrap();
        assert_eq!(cleaned.height(), 1);
        assert_eq!(removed, 2);

        let f1 = cleaned.column("f1").unwrap().f64().unwrap();
        assert_eq!(f1.get(0), Some(1.0));
    }

    #[test]
    fn test_drop_missing_no_nulls() {
        let df = df![
            "f1" => [1.0, 2.0],
            "target" => [10.0, 20.0],
        ]
        .unwrap();

        let (cleaned, removed) = DataCleaner.drop_missing(df).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_drop_duplicates_keeps_first_occurrence() {
        let df = df![
            "f1" => [1.0, 2.0, 1.0, 3.0],
            "target" => [10.0, 20.0, 10.0, 30.0],
        ]
        .unwrap();

        let (deduped, removed) = DataCleaner.drop_duplicates(df).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(deduped.height(), 3);

        // Survivors stay in original row order.
        let f1: Vec<f64> = deduped
            .column("f1")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(f1, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_drop_duplicates_compares_all_columns() {
        // Same features, different target: not a duplicate.
        let df = df![
            "f1" => [1.0, 1.0],
            "target" => [10.0, 20.0],
        ]
        .unwrap();

        let (deduped, removed) = DataCleaner.drop_duplicates(df).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(deduped.height(), 2);
    }

    #[test]
    fn test_drop_duplicates_idempotent() {
        let df = df![
            "f1" => [1.0, 1.0, 2.0],
            "target" => [10.0, 10.0, 20.0],
        ]
        .unwrap();

        let (once, first_removed) = DataCleaner.drop_duplicates(df).unwrap();
        assert_eq!(first_removed, 1);

        let (twice, second_removed) = DataCleaner.drop_duplicates(once.clone()).unwrap();
        assert_eq!(second_removed, 0);
        assert!(once.equals(&twice));
    }
}
