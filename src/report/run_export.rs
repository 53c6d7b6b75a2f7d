//! Run metadata export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::Hyperparameters;
use crate::report::RunSummary;

/// Metadata about the prediction run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Lapidary version
    pub lapidary_version: String,
    /// Training dataset path
    pub train_file: String,
    /// Test dataset path
    pub test_file: String,
    /// Submission output path
    pub output_file: String,
    /// Target column name
    pub target_column: String,
    /// Whether unknown categories were encoded as the sentinel
    pub lenient: bool,
}

/// Row counts and timings of the run
#[derive(Serialize)]
pub struct RunStats {
    /// Rows in the training dataset
    pub train_rows: usize,
    /// Rows in the test dataset
    pub test_rows: usize,
    /// Columns the model saw after preprocessing
    pub model_features: usize,
    /// Predictions written to the submission file
    pub predictions: usize,
    /// Dataset loading time in seconds
    pub load_secs: f64,
    /// Model training time in seconds
    pub fit_secs: f64,
    /// Prediction time in seconds
    pub predict_secs: f64,
}

/// Complete run report with metadata, hyperparameters, and statistics
#[derive(Serialize)]
pub struct RunReport {
    pub metadata: RunMetadata,
    pub hyperparameters: Hyperparameters,
    pub stats: RunStats,
}

/// Parameters for building a run report
pub struct ReportParams<'a> {
    pub train_file: &'a Path,
    pub test_file: &'a Path,
    pub output_file: &'a Path,
    pub target_column: &'a str,
    pub lenient: bool,
}

/// Build a run report from the summary and configuration
pub fn build_run_report(
    params: &ReportParams,
    hyperparameters: &Hyperparameters,
    summary: &RunSummary,
) -> RunReport {
    RunReport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            lapidary_version: env!("CARGO_PKG_VERSION").to_string(),
            train_file: params.train_file.display().to_string(),
            test_file: params.test_file.display().to_string(),
            output_file: params.output_file.display().to_string(),
            target_column: params.target_column.to_string(),
            lenient: params.lenient,
        },
        hyperparameters: hyperparameters.clone(),
        stats: RunStats {
            train_rows: summary.train_rows,
            test_rows: summary.test_rows,
            model_features: summary.model_features,
            predictions: summary.predictions,
            load_secs: summary.load_time.as_secs_f64(),
            fit_secs: summary.fit_time.as_secs_f64(),
            predict_secs: summary.predict_time.as_secs_f64(),
        },
    }
}

/// Export a run report to a JSON file
pub fn export_run_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize run report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write run report to {}", output_path.display()))?;

    Ok(())
}
