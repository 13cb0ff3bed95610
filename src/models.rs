use serde::{Deserialize, Serialize};

use crate::error_handling::SkipReason;

/// Action applied when a row leaves `action` blank.
pub const DEFAULT_ACTION: &str = "block";

/// One banned word entry: severity level, category, keyword and the action
/// taken when the keyword matches.
///
/// Field order is the column order of `public.banned_words` and the key order
/// of the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedWord {
    pub level: String,
    pub category: String,
    pub keyword: String,
    pub action: String,
}

impl BannedWord {
    /// Builds a record from raw column values.
    ///
    /// Every value is trimmed, `category` defaults to empty and `action` to
    /// [`DEFAULT_ACTION`]. Rows with a blank `level` or `keyword` are rejected
    /// with the reason.
    pub fn from_fields(
        level: Option<&str>,
        category: Option<&str>,
        keyword: Option<&str>,
        action: Option<&str>,
    ) -> Result<Self, SkipReason> {
        let level = level.unwrap_or_default().trim();
        let category = category.unwrap_or_default().trim();
        let keyword = keyword.unwrap_or_default().trim();
        let action = match action.map(str::trim) {
            Some(a) if !a.is_empty() => a,
            _ => DEFAULT_ACTION,
        };

        if level.is_empty() {
            return Err(SkipReason::MissingLevel);
        }
        if keyword.is_empty() {
            return Err(SkipReason::MissingKeyword);
        }

        Ok(Self {
            level: level.to_string(),
            category: category.to_string(),
            keyword: keyword.to_string(),
            action: action.to_string(),
        })
    }
}
