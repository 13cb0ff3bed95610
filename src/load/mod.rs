//! Input loading.
//!
//! This module provides:
//! - Decoding of the raw input bytes (UTF-8 with BOM removal, Big5 fallback)
//! - CSV parsing with the retention check applied per row

mod decode;
mod reader;

use std::path::Path;

use crate::error_handling::{ConvertError, SkipStats};
use crate::models::BannedWord;

pub use decode::{decode_with_fallback, TextEncoding};
pub use reader::{parse_records, ParsedRows};

/// Result of loading an input file.
#[derive(Debug)]
pub struct LoadedInput {
    /// Retained records in input row order
    pub records: Vec<BannedWord>,
    /// Encoding the file was decoded with
    pub encoding: TextEncoding,
    /// Number of data rows read (header excluded)
    pub rows_read: usize,
    /// Rows dropped by the retention check
    pub skipped: SkipStats,
}

/// Reads, decodes and parses a banned words CSV file.
///
/// # Errors
///
/// Returns `ConvertError::Io` if the file cannot be read,
/// `ConvertError::Decoding` if it is neither UTF-8 nor Big5, and
/// `ConvertError::Csv` if the CSV structure is malformed.
pub fn load_records(path: &Path) -> Result<LoadedInput, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;

    let (content, encoding) =
        decode_with_fallback(&bytes).ok_or_else(|| ConvertError::Decoding {
            path: path.to_path_buf(),
        })?;
    log::debug!("Decoded {} as {}", path.display(), encoding);

    let parsed = parse_records(&content)?;
    log::info!(
        "Read {} row(s) from {}, kept {}",
        parsed.rows_read,
        path.display(),
        parsed.records.len()
    );
    parsed.skipped.log_summary();

    Ok(LoadedInput {
        records: parsed.records,
        encoding,
        rows_read: parsed.rows_read,
        skipped: parsed.skipped,
    })
}
