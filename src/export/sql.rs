//! SQL INSERT script rendering.
//!
//! Produces a single multi-row INSERT into `public.banned_words` followed by
//! an upsert clause keyed on `(keyword, level)`.

use crate::config::BANNED_WORDS_TABLE;
use crate::models::BannedWord;

/// Escapes a value for a single-quoted SQL string literal by doubling `'`.
///
/// No other character is touched.
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

fn value_tuple(word: &BannedWord) -> String {
    format!(
        "  ('{}', '{}', '{}', '{}')",
        escape_sql_literal(&word.level),
        escape_sql_literal(&word.category),
        escape_sql_literal(&word.keyword),
        escape_sql_literal(&word.action)
    )
}

/// Renders the INSERT script for `records`.
///
/// `source_name` is echoed in the header comment. Lines are joined with
/// `\n` and the script has no trailing newline. Returns `None` for an empty
/// slice since an INSERT without values is not valid SQL.
pub fn render_sql_insert(records: &[BannedWord], source_name: &str) -> Option<String> {
    let (last, rest) = records.split_last()?;

    let mut lines = vec![
        "-- Banned words data import".to_string(),
        format!("-- Converted from {}", source_name),
        String::new(),
        format!(
            "INSERT INTO {} (level, category, keyword, action)",
            BANNED_WORDS_TABLE
        ),
        "VALUES".to_string(),
    ];

    lines.extend(rest.iter().map(|word| value_tuple(word) + ","));
    lines.push(value_tuple(last) + ";");

    lines.extend(
        [
            "",
            "-- Update existing rows on duplicate (keyword, level)",
            "ON CONFLICT (keyword, level) DO UPDATE",
            "SET",
            "  category = EXCLUDED.category,",
            "  action = EXCLUDED.action,",
            "  is_active = true,",
            "  updated_at = now();",
        ]
        .map(String::from),
    );

    Some(lines.join("\n"))
}
