//! Tests to ensure error messages name the file and the problem.

use anyhow::Context;
use banned_words_import::{run_conversion, ConvertError};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{config_for, write_input, HEADER};

#[test]
fn test_decoding_error_names_both_encodings() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "broken.csv", &[0xFF, 0xFE, 0xFF]);

    let err = run_conversion(&config_for(&dir, &input)).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("broken.csv"), "got: {}", message);
    assert!(message.contains("UTF-8") && message.contains("Big5"), "got: {}", message);
}

#[test]
fn test_write_failure_names_output_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "words.csv", format!("{HEADER}\n1,spam,foo,block\n").as_bytes());
    let mut config = config_for(&dir, &input);
    config.sql_output = dir.path().join("no_such_dir").join("import.sql");

    let err = run_conversion(&config).unwrap_err();

    assert!(matches!(err, ConvertError::Io { .. }));
    assert!(err.to_string().contains("no_such_dir"), "got: {}", err);
}

#[test]
fn test_context_chain_is_preserved() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config_for(&dir, &dir.path().join("absent.csv"));

    let err = run_conversion(&config)
        .with_context(|| format!("Failed to convert {}", config.input.display()))
        .unwrap_err();
    let rendered = format!("{:#}", err);

    assert!(rendered.starts_with("Failed to convert"), "got: {}", rendered);
    assert!(rendered.contains("I/O error on"), "got: {}", rendered);
}
