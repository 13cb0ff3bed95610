//! CSV parsing into banned word records.

use csv::{ReaderBuilder, StringRecord};

use crate::error_handling::{ConvertError, SkipReason, SkipStats};
use crate::models::BannedWord;

/// Column positions of the four known fields, looked up by exact header name.
///
/// When a name appears more than once the rightmost column wins.
#[derive(Debug, Default)]
struct ColumnIndex {
    level: Option<usize>,
    category: Option<usize>,
    keyword: Option<usize>,
    action: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| {
            let matches: Vec<usize> = headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .collect();
            if matches.len() > 1 {
                log::warn!(
                    "Header repeats '{}' {} times; using the last one",
                    name,
                    matches.len()
                );
            }
            matches.last().copied()
        };
        let index = ColumnIndex {
            level: position("level"),
            category: position("category"),
            keyword: position("keyword"),
            action: position("action"),
        };

        if index.level.is_none() {
            log::warn!("Header has no 'level' column; every row will be skipped");
        }
        if index.keyword.is_none() {
            log::warn!("Header has no 'keyword' column; every row will be skipped");
        }
        index
    }

    fn build<'r>(&self, record: &'r StringRecord) -> Result<BannedWord, SkipReason> {
        let field = |idx: Option<usize>| -> Option<&'r str> { idx.and_then(|i| record.get(i)) };
        BannedWord::from_fields(
            field(self.level),
            field(self.category),
            field(self.keyword),
            field(self.action),
        )
    }
}

/// Records parsed from CSV text together with row accounting.
#[derive(Debug)]
pub struct ParsedRows {
    /// Retained records in input order
    pub records: Vec<BannedWord>,
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows dropped by the retention check
    pub skipped: SkipStats,
}

/// Parses CSV text whose first row is a header.
///
/// Rows keep their input order. Rows may be shorter than the header; missing
/// cells read as empty. Rows failing the retention check are counted in
/// `skipped` and logged at debug level with their line number.
pub fn parse_records(content: &str) -> Result<ParsedRows, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns = ColumnIndex::from_headers(reader.headers()?);

    let mut records = Vec::new();
    let mut skipped = SkipStats::new();
    let mut rows_read = 0usize;

    for result in reader.records() {
        let record = result?;
        rows_read += 1;

        match columns.build(&record) {
            Ok(word) => records.push(word),
            Err(reason) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                log::debug!("Skipping line {}: {}", line, reason);
                skipped.increment(reason);
            }
        }
    }

    Ok(ParsedRows {
        records,
        rows_read,
        skipped,
    })
}
