//! Column preprocessing: standardization and ordinal encoding
//!
//! Two-phase transformer in the fit/transform style. `fit` captures the
//! numeric column list and per-column statistics from the training data;
//! `transform` replays them verbatim on any compatible frame. The three
//! quality columns are encoded against fixed vocabularies that are
//! compile-time constants, not learned from data.

use polars::prelude::*;

use super::error::PipelineError;

/// Cut grades, worst to best
pub const CUT_ORDER: [&str; 5] = ["Fair", "Good", "Very Good", "Premium", "Ideal"];

/// Color grades, worst to best
pub const COLOR_ORDER: [&str; 7] = ["J", "I", "H", "G", "F", "E", "D"];

/// Clarity grades, worst to best
pub const CLARITY_ORDER: [&str; 8] = ["I1", "SI2", "SI1", "VS2", "VS1", "VVS2", "VVS1", "IF"];

/// Categorical columns encoded by the preprocessor, in output order
pub const CATEGORICAL_COLUMNS: [&str; 3] = ["cut", "color", "clarity"];

/// Encoding assigned to out-of-vocabulary categories in lenient mode
pub const UNKNOWN_SENTINEL: f64 = -1.0;

/// Policy for categorical values outside the fixed vocabularies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownCategory {
    /// Fail the transform with an `UnknownCategoryError` (default)
    #[default]
    Error,
    /// Encode the value as [`UNKNOWN_SENTINEL`]
    Sentinel,
}

/// Standardization statistics for one numeric column
#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub name: String,
    pub mean: f64,
    pub std: f64,
}

/// State captured by `fit` and replayed by `transform`.
///
/// Holds the explicit list of numeric columns selected at fit time, in
/// their training-data order. Transform never re-derives this list, so
/// schema drift between fit and transform surfaces as an error instead
/// of silently changing the output shape.
#[derive(Debug, Clone)]
pub struct FittedStats {
    numeric: Vec<ColumnStats>,
}

impl FittedStats {
    /// Names of the numeric columns selected at fit time, in order
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.numeric.iter().map(|s| s.name.as_str()).collect()
    }

    /// Total number of output columns (numeric + categorical)
    pub fn output_width(&self) -> usize {
        self.numeric.len() + CATEGORICAL_COLUMNS.len()
    }
}

/// Standardizes numeric columns and ordinally encodes the quality columns
#[derive(Debug, Default)]
pub struct ColumnPreprocessor {
    unknown_policy: UnknownCategory,
    fitted: Option<FittedStats>,
}

impl ColumnPreprocessor {
    pub fn new(unknown_policy: UnknownCategory) -> Self {
        Self {
            unknown_policy,
            fitted: None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Statistics captured by `fit`, if fitted
    pub fn fitted_stats(&self) -> Option<&FittedStats> {
        self.fitted.as_ref()
    }

    /// Capture numeric columns and their standardization statistics.
    ///
    /// Every primitive-numeric column is selected; the mean and the
    /// population standard deviation are computed over non-null values.
    /// A zero deviation is stored as 1.0 so constant columns center to
    /// zero instead of dividing to NaN.
    pub fn fit(&mut self, df: &DataFrame) -> Result<(), PipelineError> {
        let mut numeric = Vec::new();

        for col in df.get_columns() {
            if !col.dtype().is_primitive_numeric() {
                continue;
            }

            let ca = col.cast(&DataType::Float64)?;
            let values = ca.f64()?;
            let mean = values.mean().unwrap_or(0.0);
            let std = match values.std(0) {
                Some(s) if s > 0.0 => s,
                _ => 1.0,
            };

            numeric.push(ColumnStats {
                name: col.name().to_string(),
                mean,
                std,
            });
        }

        self.fitted = Some(FittedStats { numeric });
        Ok(())
    }

    /// Apply the fitted standardization and the fixed ordinal encodings.
    ///
    /// Output columns are the recorded numeric columns (standardized, in
    /// fit order) followed by `cut`, `color`, `clarity` encoded as their
    /// zero-based vocabulary ranks. Any other non-numeric column is
    /// discarded. Nulls pass through as nulls in both groups.
    ///
    /// # Errors
    /// - [`PipelineError::NotFitted`] if `fit` has not been called
    /// - [`PipelineError::MissingColumn`] if a recorded or categorical
    ///   column is absent
    /// - [`PipelineError::UnknownCategory`] in strict mode for values
    ///   outside the vocabulary
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame, PipelineError> {
        let fitted = self.fitted.as_ref().ok_or(PipelineError::NotFitted {
            operation: "transform",
        })?;

        let mut columns: Vec<Column> = Vec::with_capacity(fitted.output_width());

        for stats in &fitted.numeric {
            let col = df
                .column(&stats.name)
                .map_err(|_| PipelineError::missing_column(&stats.name))?;
            let ca = col.cast(&DataType::Float64)?;
            let scaled = ca
                .f64()?
                .apply_values(|v| (v - stats.mean) / stats.std)
                .with_name(stats.name.as_str().into());
            columns.push(scaled.into_series().into_column());
        }

        for (name, vocab) in [
            ("cut", &CUT_ORDER[..]),
            ("color", &COLOR_ORDER[..]),
            ("clarity", &CLARITY_ORDER[..]),
        ] {
            columns.push(self.encode_ordinal(df, name, vocab)?);
        }

        Ok(DataFrame::new(columns)?)
    }

    /// `fit` followed by `transform` on the same frame
    pub fn fit_transform(&mut self, df: &DataFrame) -> Result<DataFrame, PipelineError> {
        self.fit(df)?;
        self.transform(df)
    }

    /// Encode one categorical column as zero-based vocabulary ranks
    fn encode_ordinal(
        &self,
        df: &DataFrame,
        name: &str,
        vocab: &[&str],
    ) -> Result<Column, PipelineError> {
        let col = df
            .column(name)
            .map_err(|_| PipelineError::missing_column(name))?;
        let values = col.str().map_err(|_| PipelineError::NotCategorical {
            column: name.to_string(),
            dtype: col.dtype().to_string(),
        })?;

        let mut ranks: Vec<Option<f64>> = Vec::with_capacity(values.len());
        for value in values.into_iter() {
            match value {
                None => ranks.push(None),
                Some(s) => match vocab.iter().position(|v| *v == s) {
                    Some(rank) => ranks.push(Some(rank as f64)),
                    None => match self.unknown_policy {
                        UnknownCategory::Sentinel => ranks.push(Some(UNKNOWN_SENTINEL)),
                        UnknownCategory::Error => {
                            return Err(PipelineError::UnknownCategory {
                                column: name.to_string(),
                                value: s.to_string(),
                            })
                        }
                    },
                },
            }
        }

        Ok(Column::new(name.into(), ranks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality_frame() -> DataFrame {
        df! {
            "depth" => [61.0f64, 62.5, 60.0],
            "cut" => ["Fair", "Premium", "Ideal"],
            "color" => ["J", "G", "D"],
            "clarity" => ["I1", "VS2", "IF"],
        }
        .unwrap()
    }

    #[test]
    fn test_encoding_is_order_preserving() {
        let mut pre = ColumnPreprocessor::default();
        let out = pre.fit_transform(&quality_frame()).unwrap();

        for name in CATEGORICAL_COLUMNS {
            let encoded: Vec<f64> = out
                .column(name)
                .unwrap()
                .f64()
                .unwrap()
                .into_iter()
                .flatten()
                .collect();
            assert!(
                encoded.windows(2).all(|w| w[0] < w[1]),
                "'{}' encodings should increase with quality: {:?}",
                name,
                encoded
            );
        }
    }

    #[test]
    fn test_vocabulary_endpoints() {
        let mut pre = ColumnPreprocessor::default();
        let out = pre.fit_transform(&quality_frame()).unwrap();

        let cut: Vec<f64> = out
            .column("cut")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(cut[0], 0.0); // Fair
        let clarity: Vec<f64> = out
            .column("clarity")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(clarity[2], (CLARITY_ORDER.len() - 1) as f64); // IF
    }

    #[test]
    fn test_unknown_category_strict_fails() {
        let df = df! {
            "depth" => [61.0f64],
            "cut" => ["Superb"],
            "color" => ["D"],
            "clarity" => ["IF"],
        }
        .unwrap();

        let mut pre = ColumnPreprocessor::new(UnknownCategory::Error);
        let err = pre.fit_transform(&df).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownCategory { .. }));
        assert!(err.to_string().contains("Superb"));
    }

    #[test]
    fn test_unknown_category_lenient_sentinel() {
        let df = df! {
            "depth" => [61.0f64],
            "cut" => ["Superb"],
            "color" => ["D"],
            "clarity" => ["IF"],
        }
        .unwrap();

        let mut pre = ColumnPreprocessor::new(UnknownCategory::Sentinel);
        let out = pre.fit_transform(&df).unwrap();
        let cut = out.column("cut").unwrap().f64().unwrap().get(0);
        assert_eq!(cut, Some(UNKNOWN_SENTINEL));
    }

    #[test]
    fn test_non_string_quality_column_rejected() {
        let df = df! {
            "depth" => [61.0f64],
            "cut" => [1i32],
            "color" => ["D"],
            "clarity" => ["IF"],
        }
        .unwrap();

        let mut pre = ColumnPreprocessor::default();
        let err = pre.fit_transform(&df).unwrap_err();
        assert!(matches!(err, PipelineError::NotCategorical { .. }));
    }
}
