//! Shared test utilities and fixture generators

use polars::prelude::*;
use rand::Rng;

/// Create a small training frame of gemstone rows with known values
///
/// Columns: the three linear dimensions (`x`, `y`, `z`), `carat`, `price`,
/// the three quality columns, two passthrough numerics (`depth`, `table`),
/// and the `outcome` target.
pub fn training_frame() -> DataFrame {
    df! {
        "carat" => [0.5f64, 0.8, 1.2, 0.3, 1.0, 0.7, 0.9, 1.5],
        "depth" => [61.5f64, 62.0, 60.8, 61.0, 62.5, 59.9, 61.2, 60.5],
        "table" => [55.0f64, 57.0, 56.0, 54.0, 58.0, 55.5, 56.5, 57.5],
        "x" => [4.0f64, 5.9, 6.8, 4.3, 6.4, 5.7, 6.1, 7.3],
        "y" => [4.0f64, 5.95, 6.75, 4.35, 6.35, 5.65, 6.15, 7.25],
        "z" => [2.5f64, 3.7, 4.1, 2.7, 3.9, 3.5, 3.8, 4.5],
        "price" => [1000.0f64, 2800.0, 6200.0, 500.0, 4800.0, 2100.0, 3500.0, 9000.0],
        "cut" => ["Ideal", "Premium", "Good", "Fair", "Very Good", "Ideal", "Premium", "Ideal"],
        "color" => ["E", "G", "J", "D", "F", "H", "I", "E"],
        "clarity" => ["VS1", "SI1", "I1", "IF", "VVS2", "VS2", "SI2", "VVS1"],
        "outcome" => [1000.0f64, 2750.0, 6100.0, 520.0, 4900.0, 2050.0, 3450.0, 9100.0],
    }
    .unwrap()
}

/// A structurally identical test frame: same feature columns, no `outcome`
pub fn test_frame() -> DataFrame {
    training_frame().drop("outcome").unwrap()
}

/// The single test row from the end-to-end scenario in the requirements
pub fn single_test_row() -> DataFrame {
    df! {
        "carat" => [0.5f64],
        "depth" => [61.5f64],
        "table" => [55.0f64],
        "x" => [4.0f64],
        "y" => [4.0f64],
        "z" => [2.5f64],
        "price" => [1000.0f64],
        "cut" => ["Ideal"],
        "color" => ["E"],
        "clarity" => ["VS1"],
    }
    .unwrap()
}

/// Create a larger random gemstone frame for statistics checks
pub fn random_training_frame(rows: usize) -> DataFrame {
    let mut rng = rand::thread_rng();

    let cuts = ["Fair", "Good", "Very Good", "Premium", "Ideal"];
    let colors = ["J", "I", "H", "G", "F", "E", "D"];
    let clarities = ["I1", "SI2", "SI1", "VS2", "VS1", "VVS2", "VVS1", "IF"];

    let carat: Vec<f64> = (0..rows).map(|_| rng.gen_range(0.2..2.5)).collect();
    let x: Vec<f64> = (0..rows).map(|_| rng.gen_range(3.5..9.0)).collect();
    let y: Vec<f64> = (0..rows).map(|_| rng.gen_range(3.5..9.0)).collect();
    let z: Vec<f64> = (0..rows).map(|_| rng.gen_range(2.0..6.0)).collect();
    let depth: Vec<f64> = (0..rows).map(|_| rng.gen_range(55.0..70.0)).collect();
    let table: Vec<f64> = (0..rows).map(|_| rng.gen_range(50.0..65.0)).collect();
    let price: Vec<f64> = carat.iter().map(|c| c * 4000.0).collect();
    let outcome: Vec<f64> = price.iter().map(|p| p * rng.gen_range(0.9..1.1)).collect();
    let cut: Vec<&str> = (0..rows).map(|_| cuts[rng.gen_range(0..cuts.len())]).collect();
    let color: Vec<&str> = (0..rows)
        .map(|_| colors[rng.gen_range(0..colors.len())])
        .collect();
    let clarity: Vec<&str> = (0..rows)
        .map(|_| clarities[rng.gen_range(0..clarities.len())])
        .collect();

    df! {
        "carat" => carat,
        "depth" => depth,
        "table" => table,
        "x" => x,
        "y" => y,
        "z" => z,
        "price" => price,
        "cut" => cut,
        "color" => color,
        "clarity" => clarity,
        "outcome" => outcome,
    }
    .unwrap()
}

/// Population (ddof 0) standard deviation of a slice
pub fn population_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}

/// Extract a column as a Vec of non-null f64 values
pub fn column_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}
