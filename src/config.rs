//! Configuration for the cleaning pipeline.
//!
//! Input path, output path, target column and delimiter are call parameters
//! rather than globals, set through a builder with validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one pipeline run.
///
/// Use [`PipelineConfig::builder()`] to create a validated configuration.
///
/// # Example
///
/// ```rust,ignore
/// use table_prep::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .input_path("data/raw.csv")
///     .output_path("data/processed.csv")
///     .target_column("target")
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path of the delimited input file.
    pub input_path: PathBuf,

    /// Path the cleaned table is written to. The parent directory must
    /// already exist.
    pub output_path: PathBuf,

    /// Name of the target column. All other columns are treated as features.
    pub target_column: String,

    /// Field separator for both input and output.
    /// Default: `b','`
    pub delimiter: u8,
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.target_column.is_empty() {
            return Err(ConfigValidationError::EmptyTargetColumn);
        }

        if !self.delimiter.is_ascii() || self.delimiter == b'"' || self.delimiter == b'\n' {
            return Err(ConfigValidationError::InvalidDelimiter(self.delimiter));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("target column name must not be empty")]
    EmptyTargetColumn,

    #[error("invalid delimiter byte {0:#04x} (must be ASCII, not a quote or newline)")]
    InvalidDelimiter(u8),
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    target_column: Option<String>,
    delimiter: Option<u8>,
}

impl PipelineConfigBuilder {
    /// Set the input file path. Required.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the output file path. Required.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the target column name. Required.
    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    /// Set the field separator. Defaults to a comma.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if a required field
    /// is missing or a value is invalid.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let config = PipelineConfig {
            input_path: self
                .input_path
                .ok_or(ConfigValidationError::MissingField("input_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigValidationError::MissingField("output_path"))?,
            target_column: self
                .target_column
                .ok_or(ConfigValidationError::MissingField("target_column"))?,
            delimiter: self.delimiter.unwrap_or(b','),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> PipelineConfigBuilder {
        PipelineConfig::builder()
            .input_path("in.csv")
            .output_path("out.csv")
            .target_column("target")
    }

    #[test]
    fn test_builder_defaults() {
        let config = full_builder().build().unwrap();
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.target_column, "target");
    }

    #[test]
    fn test_builder_custom_delimiter() {
        let config = full_builder().delimiter(b';').build().unwrap();
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn test_missing_input_path() {
        let result = PipelineConfig::builder()
            .output_path("out.csv")
            .target_column("target")
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::MissingField("input_path")
        ));
    }

    #[test]
    fn test_missing_target_column() {
        let result = PipelineConfig::builder()
            .input_path("in.csv")
            .output_path("out.csv")
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::MissingField("target_column")
        ));
    }

    #[test]
    fn test_empty_target_column_rejected() {
        let result = full_builder().target_column("").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyTargetColumn
        ));
    }

    #[test]
    fn test_quote_delimiter_rejected() {
        let result = full_builder().delimiter(b'"').build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidDelimiter(b'"')
        ));
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = full_builder().delimiter(b'\t').build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PipelineConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.input_path, deserialized.input_path);
        assert_eq!(config.delimiter, deserialized.delimiter);
        assert_eq!(config.target_column, deserialized.target_column);
    }
}
