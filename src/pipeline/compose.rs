//! Pipeline composition
//!
//! Chains feature derivation, column preprocessing, and a regression
//! model into one fit/predict unit. Both paths run the exact same
//! deterministic transformation; the only state learned from training
//! data lives in the preprocessor statistics and the fitted model.

use anyhow::Result;
use polars::prelude::*;

use super::error::PipelineError;
use super::features::derive_features;
use super::model::Regressor;
use super::preprocess::{ColumnPreprocessor, UnknownCategory};

/// Feature derivation → column preprocessing → regression model.
///
/// Constructed once, fitted exactly once with `fit`, then `predict` may
/// be called any number of times with schema-compatible frames. `fit`
/// takes `&mut self` and `predict` takes `&self`, so the fitted-state
/// transition is a single-writer event enforced by the borrow checker.
pub struct PricePipeline<M: Regressor> {
    preprocessor: ColumnPreprocessor,
    model: M,
}

impl<M: Regressor> PricePipeline<M> {
    pub fn new(model: M, unknown_policy: UnknownCategory) -> Self {
        Self {
            preprocessor: ColumnPreprocessor::new(unknown_policy),
            model,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.preprocessor.is_fitted()
    }

    /// Number of columns the model sees after preprocessing, once fitted
    pub fn feature_count(&self) -> Option<usize> {
        self.preprocessor.fitted_stats().map(|s| s.output_width())
    }

    /// Derive features, fit-transform the preprocessor, fit the model.
    ///
    /// `target` holds one value per row of `features`.
    pub fn fit(&mut self, features: &DataFrame, target: &[f64]) -> Result<()> {
        let derived = derive_features(features)?;
        let matrix = self.preprocessor.fit_transform(&derived)?;
        self.model.fit(&matrix, target)?;
        Ok(())
    }

    /// Derive features, replay the fitted preprocessing, predict.
    ///
    /// Returns one prediction per input row, in row order. Side-effect
    /// free: repeated calls with the same input yield identical output.
    pub fn predict(&self, features: &DataFrame) -> Result<Vec<f64>> {
        if !self.preprocessor.is_fitted() {
            return Err(PipelineError::NotFitted {
                operation: "predict",
            }
            .into());
        }

        let derived = derive_features(features)?;
        let matrix = self.preprocessor.transform(&derived)?;
        self.model.predict(&matrix)
    }
}
