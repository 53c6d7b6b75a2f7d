//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{Hyperparameters, UnknownCategory};

/// Lapidary - train a gradient boosted model and write gemstone price predictions
#[derive(Parser, Debug)]
#[command(name = "lapidary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Training dataset path (CSV or Parquet). Must contain the target column.
    #[arg(short = 'i', long)]
    pub train: PathBuf,

    /// Test dataset path (CSV or Parquet). Same feature columns as training,
    /// without the target.
    #[arg(short = 'e', long)]
    pub test: PathBuf,

    /// Output path for the submission CSV (single 'yhat' column, one row per
    /// test record)
    #[arg(short, long, default_value = "submission.csv")]
    pub output: PathBuf,

    /// Target column name in the training dataset
    #[arg(short, long, default_value = "outcome")]
    pub target: String,

    /// Encode categories outside the fixed quality vocabularies as -1 instead
    /// of failing the run
    #[arg(long, default_value = "false")]
    pub lenient: bool,

    /// Write run metadata (hyperparameters, row counts, timings) to this JSON
    /// file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Number of rows to use for schema inference (CSV only).
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Number of boosting rounds (trees)
    #[arg(long, default_value = "800")]
    pub rounds: u32,

    /// Learning rate (step size shrinkage, eta)
    #[arg(long, default_value = "0.01", value_parser = validate_fraction)]
    pub learning_rate: f32,

    /// Maximum tree depth
    #[arg(long, default_value = "4")]
    pub max_depth: u32,

    /// Minimum sum of instance weights needed in a child node
    #[arg(long, default_value = "10.0", value_parser = validate_non_negative)]
    pub min_child_weight: f32,

    /// Minimum loss reduction required to make a split
    #[arg(long, default_value = "0.0", value_parser = validate_non_negative)]
    pub gamma: f32,

    /// Fraction of training rows sampled per tree
    #[arg(long, default_value = "0.7", value_parser = validate_fraction)]
    pub subsample: f32,

    /// Fraction of feature columns sampled per tree
    #[arg(long, default_value = "0.8", value_parser = validate_fraction)]
    pub colsample_bytree: f32,

    /// L2 regularization strength (lambda)
    #[arg(long, default_value = "1.0", value_parser = validate_non_negative)]
    pub reg_lambda: f32,

    /// L1 regularization strength (alpha)
    #[arg(long, default_value = "0.5", value_parser = validate_non_negative)]
    pub reg_alpha: f32,
}

impl Cli {
    /// Policy for categorical values outside the fixed vocabularies
    pub fn unknown_policy(&self) -> UnknownCategory {
        if self.lenient {
            UnknownCategory::Sentinel
        } else {
            UnknownCategory::Error
        }
    }

    /// Assemble the booster hyperparameters from the CLI flags
    pub fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            boost_rounds: self.rounds,
            learning_rate: self.learning_rate,
            max_depth: self.max_depth,
            min_child_weight: self.min_child_weight,
            gamma: self.gamma,
            subsample: self.subsample,
            colsample_bytree: self.colsample_bytree,
            lambda: self.reg_lambda,
            alpha: self.reg_alpha,
        }
    }
}

/// Validator for fraction parameters in (0, 1]
fn validate_fraction(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value <= 0.0 || value > 1.0 {
        Err(format!("value must be in (0.0, 1.0], got {}", value))
    } else {
        Ok(value)
    }
}

/// Validator for non-negative parameters
fn validate_non_negative(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value < 0.0 {
        Err(format!("value must be >= 0.0, got {}", value))
    } else {
        Ok(value)
    }
}
