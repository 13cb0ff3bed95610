// Shared test helpers for fixture files and configs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use banned_words_import::{BannedWord, Config};
use tempfile::TempDir;

/// Header row with the four known columns.
#[allow(dead_code)] // Used by other test files
pub const HEADER: &str = "level,category,keyword,action";

/// Writes `bytes` as `name` inside `dir` and returns the path.
pub fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write input fixture");
    path
}

/// Builds a config reading `input` and writing every output into `dir`.
pub fn config_for(dir: &TempDir, input: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        sql_output: dir.path().join("import.sql"),
        json_output: dir.path().join("words.json"),
        ..Default::default()
    }
}

/// Shorthand record constructor.
#[allow(dead_code)] // Used by other test files
pub fn word(level: &str, category: &str, keyword: &str, action: &str) -> BannedWord {
    BannedWord {
        level: level.to_string(),
        category: category.to_string(),
        keyword: keyword.to_string(),
        action: action.to_string(),
    }
}

/// Reads the JSON export back into records.
#[allow(dead_code)] // Used by other test files
pub fn read_json(path: &Path) -> Vec<BannedWord> {
    let text = std::fs::read_to_string(path).expect("Failed to read JSON output");
    serde_json::from_str(&text).expect("JSON output should parse")
}

/// Names of the files present in `dir`, sorted.
#[allow(dead_code)] // Used by other test files
pub fn file_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("Failed to list temp dir")
        .map(|e| {
            e.expect("Failed to read dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
