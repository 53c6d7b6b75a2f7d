//! Regression model seam and the XGBoost-backed implementation
//!
//! The pipeline only depends on the [`Regressor`] trait, so the booster
//! stays an opaque fit/predict capability. [`GradientBooster`] adapts the
//! `xgboost` crate: frames are flattened to row-major f32 with nulls as
//! NaN (XGBoost's missing-value marker).

use anyhow::{anyhow, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use xgboost::{parameters, Booster, DMatrix};

use super::error::PipelineError;

/// A regression model exposing fit and predict over feature frames.
///
/// `fit` consumes one target value per row; `predict` returns one
/// prediction per row, in row order.
pub trait Regressor {
    fn fit(&mut self, features: &DataFrame, target: &[f64]) -> Result<()>;
    fn predict(&self, features: &DataFrame) -> Result<Vec<f64>>;
}

/// Booster hyperparameters.
///
/// Defaults are the tuned values the submission run uses; the CLI exposes
/// a flag per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Number of boosting rounds (trees)
    pub boost_rounds: u32,
    /// Step size shrinkage (eta)
    pub learning_rate: f32,
    /// Maximum tree depth
    pub max_depth: u32,
    /// Minimum sum of instance weights needed in a child
    pub min_child_weight: f32,
    /// Minimum loss reduction required to split
    pub gamma: f32,
    /// Row subsampling fraction per tree
    pub subsample: f32,
    /// Column subsampling fraction per tree
    pub colsample_bytree: f32,
    /// L2 regularization strength
    pub lambda: f32,
    /// L1 regularization strength
    pub alpha: f32,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            boost_rounds: 800,
            learning_rate: 0.01,
            max_depth: 4,
            min_child_weight: 10.0,
            gamma: 0.0,
            subsample: 0.7,
            colsample_bytree: 0.8,
            lambda: 1.0,
            alpha: 0.5,
        }
    }
}

/// Gradient-boosted regression trees via XGBoost
pub struct GradientBooster {
    params: Hyperparameters,
    booster: Option<Booster>,
}

impl GradientBooster {
    pub fn new(params: Hyperparameters) -> Self {
        Self {
            params,
            booster: None,
        }
    }

    fn training_params<'a>(
        &self,
        dtrain: &'a DMatrix,
    ) -> Result<parameters::TrainingParameters<'a>> {
        let p = &self.params;

        let tree_params = parameters::tree::TreeBoosterParametersBuilder::default()
            .eta(p.learning_rate)
            .gamma(p.gamma)
            .max_depth(p.max_depth)
            .min_child_weight(p.min_child_weight)
            .subsample(p.subsample)
            .colsample_bytree(p.colsample_bytree)
            .lambda(p.lambda)
            .alpha(p.alpha)
            .build()
            .map_err(|e| anyhow!("Invalid tree parameters: {}", e))?;

        let learning_params = parameters::learning::LearningTaskParametersBuilder::default()
            .objective(parameters::learning::Objective::RegLinear)
            .build()
            .map_err(|e| anyhow!("Invalid learning parameters: {}", e))?;

        let booster_params = parameters::BoosterParametersBuilder::default()
            .booster_type(parameters::BoosterType::Tree(tree_params))
            .learning_params(learning_params)
            .verbose(false)
            .build()
            .map_err(|e| anyhow!("Invalid booster parameters: {}", e))?;

        parameters::TrainingParametersBuilder::default()
            .dtrain(dtrain)
            .boost_rounds(p.boost_rounds)
            .booster_params(booster_params)
            .build()
            .map_err(|e| anyhow!("Invalid training parameters: {}", e))
    }
}

impl Regressor for GradientBooster {
    fn fit(&mut self, features: &DataFrame, target: &[f64]) -> Result<()> {
        let (data, rows) = to_row_major(features)?;
        let mut dtrain = DMatrix::from_dense(&data, rows)
            .map_err(|e| anyhow!("Failed to build training matrix: {}", e))?;

        let labels: Vec<f32> = target.iter().map(|&v| v as f32).collect();
        dtrain
            .set_labels(&labels)
            .map_err(|e| anyhow!("Failed to attach labels: {}", e))?;

        let training_params = self.training_params(&dtrain)?;
        let booster = Booster::train(&training_params)
            .map_err(|e| anyhow!("XGBoost training failed: {}", e))?;

        self.booster = Some(booster);
        Ok(())
    }

    fn predict(&self, features: &DataFrame) -> Result<Vec<f64>> {
        let booster = self.booster.as_ref().ok_or(PipelineError::NotFitted {
            operation: "predict",
        })?;

        let (data, rows) = to_row_major(features)?;
        let dtest = DMatrix::from_dense(&data, rows)
            .map_err(|e| anyhow!("Failed to build prediction matrix: {}", e))?;

        let predictions = booster
            .predict(&dtest)
            .map_err(|e| anyhow!("XGBoost prediction failed: {}", e))?;

        Ok(predictions.into_iter().map(f64::from).collect())
    }
}

/// Flatten a frame into the row-major f32 layout `DMatrix` expects.
///
/// Nulls become NaN, which XGBoost treats as missing.
pub fn to_row_major(df: &DataFrame) -> Result<(Vec<f32>, usize), PipelineError> {
    let height = df.height();

    let mut column_values: Vec<Vec<f64>> = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        let ca = col.cast(&DataType::Float64)?;
        column_values.push(
            ca.f64()?
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect(),
        );
    }

    let mut data = Vec::with_capacity(height * column_values.len());
    for row in 0..height {
        for col in &column_values {
            data.push(col[row] as f32);
        }
    }

    Ok((data, height))
}
