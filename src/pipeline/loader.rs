//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::error::PipelineError;

/// Load a dataset from a file (CSV or Parquet based on extension).
///
/// `infer_schema_length` controls how many rows the CSV reader samples
/// for type detection; 0 means a full table scan.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(infer)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    lf.collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))
}

/// Shape and estimated in-memory size of a loaded dataset
pub fn dataset_stats(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}

/// Split a training frame into a feature frame and a target vector.
///
/// The target column is removed from the returned frame, so the pipeline
/// never sees it as a feature.
///
/// # Errors
/// Fails if the target column is absent or contains nulls.
pub fn split_features_and_target(
    df: &DataFrame,
    target: &str,
) -> Result<(DataFrame, Vec<f64>), PipelineError> {
    let col = df
        .column(target)
        .map_err(|_| PipelineError::missing_column(target))?;

    let nulls = col.null_count();
    if nulls > 0 {
        return Err(PipelineError::NullTarget {
            column: target.to_string(),
            nulls,
        });
    }

    let ca = col.cast(&DataType::Float64)?;
    let values: Vec<f64> = ca.f64()?.into_iter().flatten().collect();

    let features = df.drop(target)?;
    Ok((features, values))
}
