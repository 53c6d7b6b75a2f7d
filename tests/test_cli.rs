//! Tests for CLI argument parsing and binary error paths

use assert_cmd::Command;
use clap::Parser;
use lapidary::cli::Cli;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["lapidary", "--train", "train.csv", "--test", "test.csv"]);

    assert_eq!(cli.target, "outcome", "Default target should be 'outcome'");
    assert_eq!(
        cli.output.to_str().unwrap(),
        "submission.csv",
        "Default output should be submission.csv"
    );
    assert!(!cli.lenient, "Strict mode should be the default");
    assert_eq!(cli.rounds, 800, "Default rounds should be 800");
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
}

#[test]
fn test_cli_custom_hyperparameters() {
    let cli = Cli::parse_from([
        "lapidary",
        "--train",
        "train.csv",
        "--test",
        "test.csv",
        "--rounds",
        "100",
        "--learning-rate",
        "0.1",
        "--max-depth",
        "6",
    ]);

    let params = cli.hyperparameters();
    assert_eq!(params.boost_rounds, 100);
    assert_eq!(params.learning_rate, 0.1);
    assert_eq!(params.max_depth, 6);
}

#[test]
fn test_cli_rejects_out_of_range_subsample() {
    let result = Cli::try_parse_from([
        "lapidary",
        "--train",
        "train.csv",
        "--test",
        "test.csv",
        "--subsample",
        "1.5",
    ]);

    assert!(result.is_err(), "Subsample above 1.0 should be rejected");
}

#[test]
fn test_binary_requires_input_paths() {
    Command::cargo_bin("lapidary")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--train"));
}

#[test]
fn test_binary_fails_on_nonexistent_train_file() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("lapidary")
        .unwrap()
        .arg("--train")
        .arg(temp_dir.path().join("missing.csv"))
        .arg("--test")
        .arg(temp_dir.path().join("also_missing.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn test_binary_fails_on_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let txt_path = temp_dir.path().join("data.txt");
    std::fs::write(&txt_path, "a,b\n1,2\n").unwrap();

    Command::cargo_bin("lapidary")
        .unwrap()
        .arg("--train")
        .arg(&txt_path)
        .arg("--test")
        .arg(&txt_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_binary_help_mentions_submission() {
    Command::cargo_bin("lapidary")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submission"));
}
