//! Stateless feature derivation
//!
//! Replaces the raw stone measurements with derived features: the three
//! linear dimensions collapse into a volume, and the heavily right-skewed
//! `price` and `carat` columns are log-transformed.

use polars::prelude::*;

use super::error::PipelineError;

/// Columns consumed by derivation and removed from the output
pub const CONSUMED_COLUMNS: [&str; 5] = ["x", "y", "z", "carat", "price"];

/// Columns appended by derivation, in output order
pub const DERIVED_COLUMNS: [&str; 3] = ["volume", "log_price", "log_carat"];

/// Derive model features from raw stone measurements.
///
/// Computes `volume = x * y * z`, `log_price = ln(1 + price)` and
/// `log_carat = ln(1 + carat)`, drops the five consumed columns, and
/// appends the derived columns after the untouched passthrough columns.
/// The input frame is not mutated.
///
/// Derivation is stateless: the same input always produces the same
/// output, on training and test data alike. Values below -1 in `price`
/// or `carat` yield NaN from `ln_1p` and are propagated as-is.
///
/// # Errors
/// Returns [`PipelineError::MissingColumn`] if any consumed column is
/// absent.
pub fn derive_features(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    for name in CONSUMED_COLUMNS {
        if df.column(name).is_err() {
            return Err(PipelineError::missing_column(name));
        }
    }

    // Cast up front so integer-typed measurement columns work too
    let x = df.column("x")?.cast(&DataType::Float64)?;
    let y = df.column("y")?.cast(&DataType::Float64)?;
    let z = df.column("z")?.cast(&DataType::Float64)?;
    let carat = df.column("carat")?.cast(&DataType::Float64)?;
    let price = df.column("price")?.cast(&DataType::Float64)?;

    let volume = (&(x.f64()? * y.f64()?) * z.f64()?).with_name("volume".into());
    let log_price = price
        .f64()?
        .apply_values(f64::ln_1p)
        .with_name("log_price".into());
    let log_carat = carat
        .f64()?
        .apply_values(f64::ln_1p)
        .with_name("log_carat".into());

    let mut out = df.drop_many(CONSUMED_COLUMNS);
    out.with_column(volume.into_series())?;
    out.with_column(log_price.into_series())?;
    out.with_column(log_carat.into_series())?;

    Ok(out)
}
