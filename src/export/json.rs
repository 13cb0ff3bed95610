//! JSON export and the SQL import-function call built from it.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::config::{IMPORT_CALL_SUFFIX, IMPORT_FUNCTION};
use crate::error_handling::ConvertError;
use crate::models::BannedWord;

use super::sql::escape_sql_literal;

/// Renders `records` as a pretty-printed JSON array (two-space indent).
///
/// serde_json writes non-ASCII characters as-is, so keywords stay readable.
pub fn render_json(records: &[BannedWord]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Single-line JSON with `", "` between items and `": "` after keys.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_string(records: &[BannedWord]) -> Result<String, ConvertError> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    records.serialize(&mut serializer)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Renders a `SELECT` that passes `records` to the import function as one
/// JSONB literal.
///
/// The payload is single-line JSON spaced like `{"level": "1", ...}`, with
/// single quotes doubled so it stays a valid SQL string literal.
pub fn render_sql_call(records: &[BannedWord]) -> Result<String, ConvertError> {
    let payload = to_spaced_string(records)?;
    Ok(format!(
        "\n-- Import via the {name} function\nSELECT * FROM public.{name}(\n  '{payload}'::JSONB\n);\n",
        name = IMPORT_FUNCTION,
        payload = escape_sql_literal(&payload)
    ))
}

/// Derives the import-call script path from the JSON output path.
///
/// `out/banned_words.json` becomes `out/banned_words_import.sql`.
pub fn sql_call_path(json_path: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{}{}", stem, IMPORT_CALL_SUFFIX))
}
