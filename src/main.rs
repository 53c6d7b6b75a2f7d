//! Lapidary: Gemstone Price Prediction CLI Tool
//!
//! A command-line tool that trains a gradient boosted regression model on
//! tabular gemstone data and writes price predictions for a held-out test
//! set as a single-column submission CSV.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use polars::prelude::*;

use cli::Cli;
use pipeline::{
    dataset_stats, load_dataset, split_features_and_target, GradientBooster, PricePipeline,
};
use report::{build_run_report, export_run_report, ReportParams, RunSummary};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config, print_info,
    print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let hyperparameters = cli.hyperparameters();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &cli.train,
        &cli.test,
        &cli.output,
        &cli.target,
        cli.lenient,
        &hyperparameters,
    );

    let mut summary = RunSummary::new();

    // Step 1: Load datasets
    print_step_header(1, "Load Datasets");
    let step_start = Instant::now();
    let spinner = create_spinner("Loading datasets...");
    let train_df = load_dataset(&cli.train, cli.infer_schema_length)?;
    let test_df = load_dataset(&cli.test, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Datasets loaded");

    let (train_rows, train_cols, train_mb) = dataset_stats(&train_df);
    let (test_rows, test_cols, _) = dataset_stats(&test_df);
    println!();
    println!("    {} Dataset statistics:", style("✧").cyan());
    println!(
        "      Train: {} rows x {} columns ({:.2} MB)",
        train_rows, train_cols, train_mb
    );
    println!("      Test:  {} rows x {} columns", test_rows, test_cols);

    summary.set_rows(train_rows, test_rows);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Split the target out before the pipeline ever sees the training frame
    let (x_train, y_train) = split_features_and_target(&train_df, &cli.target)?;

    // Step 2: Train model
    print_step_header(2, "Train Model");
    let step_start = Instant::now();
    let spinner = create_spinner(&format!(
        "Training booster ({} rounds)...",
        hyperparameters.boost_rounds
    ));
    let booster = GradientBooster::new(hyperparameters.clone());
    let mut pipeline = PricePipeline::new(booster, cli.unknown_policy());
    pipeline.fit(&x_train, &y_train)?;
    finish_with_success(&spinner, "Model trained");

    if let Some(count) = pipeline.feature_count() {
        summary.model_features = count;
        print_info(&format!(
            "Model sees {} feature column(s) after preprocessing",
            count
        ));
    }
    let fit_elapsed = step_start.elapsed();
    summary.set_fit_time(fit_elapsed);
    print_step_time(fit_elapsed);

    // Step 3: Predict
    print_step_header(3, "Predict Test Set");
    let step_start = Instant::now();
    let spinner = create_spinner("Predicting test rows...");
    let predictions = pipeline.predict(&test_df)?;
    finish_with_success(&spinner, "Predictions complete");

    summary.predictions = predictions.len();
    let predict_elapsed = step_start.elapsed();
    summary.set_predict_time(predict_elapsed);
    print_step_time(predict_elapsed);

    // Step 4: Write submission
    print_step_header(4, "Write Submission");
    let step_start = Instant::now();
    write_submission(&predictions, &cli.output)?;
    print_success(&format!(
        "Saved {} prediction(s) to {}",
        predictions.len(),
        cli.output.display()
    ));

    if let Some(report_path) = &cli.report {
        let params = ReportParams {
            train_file: &cli.train,
            test_file: &cli.test,
            output_file: &cli.output,
            target_column: &cli.target,
            lenient: cli.lenient,
        };
        let report = build_run_report(&params, &hyperparameters, &summary);
        export_run_report(&report, report_path)?;
        print_success(&format!("Run report written to {}", report_path.display()));
    }

    let write_elapsed = step_start.elapsed();
    summary.set_write_time(write_elapsed);
    print_step_time(write_elapsed);

    // Display summary
    summary.display();

    print_completion();

    Ok(())
}

/// Write predictions as a single-column CSV headed `yhat`, one row per
/// prediction, no index column
fn write_submission(predictions: &[f64], path: &std::path::Path) -> Result<()> {
    let mut df = DataFrame::new(vec![Column::new("yhat".into(), predictions)])?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}
