//! Export functionality for banned word records.
//!
//! This module renders records into the three output files:
//! - SQL INSERT script with an upsert clause
//! - JSON array
//! - SQL call passing the JSON array to the import function
//!
//! Each export writes exactly one file. An empty record slice writes nothing
//! and returns [`ExportOutcome::Empty`].

mod json;
mod sql;
mod types;
mod writer;

use std::path::Path;

use crate::error_handling::ConvertError;
use crate::models::BannedWord;

pub use json::{render_json, render_sql_call, sql_call_path};
pub use sql::{escape_sql_literal, render_sql_insert};
pub use types::{Artifact, ExportOutcome};

use writer::write_atomically;

fn empty(artifact: Artifact) -> ExportOutcome {
    log::warn!("No valid records found, {} not written", artifact);
    ExportOutcome::Empty { artifact }
}

fn written(artifact: Artifact, path: &Path, records: usize) -> ExportOutcome {
    log::info!("Wrote {} to {} ({} records)", artifact, path.display(), records);
    ExportOutcome::Written {
        artifact,
        path: path.to_path_buf(),
        records,
    }
}

/// Writes the INSERT script for `records` to `output`.
///
/// `source_name` is the input file name echoed in the script header.
///
/// # Errors
///
/// Returns `ConvertError::Io` if the file cannot be written.
pub fn export_sql(
    records: &[BannedWord],
    output: &Path,
    source_name: &str,
) -> Result<ExportOutcome, ConvertError> {
    let Some(script) = render_sql_insert(records, source_name) else {
        return Ok(empty(Artifact::SqlInsert));
    };
    write_atomically(output, &script)?;
    Ok(written(Artifact::SqlInsert, output, records.len()))
}

/// Writes `records` as a JSON array to `output`.
///
/// # Errors
///
/// Returns `ConvertError::Json` if serialization fails or
/// `ConvertError::Io` if the file cannot be written.
pub fn export_json(records: &[BannedWord], output: &Path) -> Result<ExportOutcome, ConvertError> {
    if records.is_empty() {
        return Ok(empty(Artifact::Json));
    }
    write_atomically(output, &render_json(records)?)?;
    Ok(written(Artifact::Json, output, records.len()))
}

/// Writes the import-function call script next to the JSON export.
///
/// The destination is derived from `json_output` with [`sql_call_path`].
///
/// # Errors
///
/// Returns `ConvertError::Json` if serialization fails or
/// `ConvertError::Io` if the file cannot be written.
pub fn export_sql_call(
    records: &[BannedWord],
    json_output: &Path,
) -> Result<ExportOutcome, ConvertError> {
    if records.is_empty() {
        return Ok(empty(Artifact::SqlCall));
    }
    let output = sql_call_path(json_output);
    write_atomically(&output, &render_sql_call(records)?)?;
    Ok(written(Artifact::SqlCall, &output, records.len()))
}
