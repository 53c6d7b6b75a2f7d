//! Error types for the prediction pipeline.
//!
//! This module defines the `PipelineError` enum covering the failure modes
//! of feature derivation, preprocessing, and composition: missing columns,
//! categories outside the fixed vocabularies, and use before fitting.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while deriving, preprocessing, or composing.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A column the pipeline requires is absent from the input frame.
    ///
    /// Raised by feature derivation (`x`, `y`, `z`, `carat`, `price`), by
    /// transform when a column recorded at fit time is gone, and by the
    /// driver when the target column is missing from the training data.
    #[error("Required column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A categorical value outside the fixed vocabulary was encountered.
    ///
    /// Only raised in strict mode; lenient mode encodes the value as the
    /// -1.0 sentinel instead.
    #[error("Unknown category '{value}' in column '{column}'")]
    UnknownCategory {
        /// Column being encoded
        column: String,
        /// The value that is not part of the vocabulary
        value: String,
    },

    /// A column expected to hold category strings has another dtype.
    #[error("Column '{column}' is not a string column (found {dtype})")]
    NotCategorical {
        /// Column being encoded
        column: String,
        /// The dtype actually found
        dtype: String,
    },

    /// `transform` or `predict` was called before `fit`.
    #[error("Pipeline is not fitted: call fit before {operation}")]
    NotFitted {
        /// The operation that was attempted
        operation: &'static str,
    },

    /// The target column contains null values.
    #[error("Target column '{column}' contains {nulls} null value(s)")]
    NullTarget {
        /// Name of the target column
        column: String,
        /// Number of nulls found
        nulls: usize,
    },

    /// An underlying polars operation failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl PipelineError {
    /// Convenience constructor for the common missing-column case
    pub fn missing_column(column: impl Into<String>) -> Self {
        PipelineError::MissingColumn {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = PipelineError::missing_column("clarity");
        assert_eq!(
            err.to_string(),
            "Required column 'clarity' not found in dataset"
        );
    }

    #[test]
    fn test_unknown_category_display() {
        let err = PipelineError::UnknownCategory {
            column: "cut".to_string(),
            value: "Superb".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category 'Superb' in column 'cut'");
    }

    #[test]
    fn test_not_fitted_display() {
        let err = PipelineError::NotFitted {
            operation: "transform",
        };
        assert_eq!(
            err.to_string(),
            "Pipeline is not fitted: call fit before transform"
        );
    }

    #[test]
    fn test_null_target_display() {
        let err = PipelineError::NullTarget {
            column: "outcome".to_string(),
            nulls: 3,
        };
        assert_eq!(
            err.to_string(),
            "Target column 'outcome' contains 3 null value(s)"
        );
    }
}
