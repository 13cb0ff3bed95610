//! Skipped row statistics.
//!
//! Counts rows dropped by the retention check, grouped by [`SkipReason`].

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Per-reason counters for rows that did not become records.
///
/// All reasons are initialized to zero on creation so reports always list
/// every reason, including ones that never occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipStats {
    counts: HashMap<SkipReason, usize>,
}

impl SkipStats {
    /// Creates counters with every reason at zero.
    pub fn new() -> Self {
        SkipStats {
            counts: SkipReason::iter().map(|reason| (reason, 0)).collect(),
        }
    }

    /// Records one skipped row.
    pub fn increment(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    /// Number of rows skipped for `reason`.
    pub fn get(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    /// Total number of skipped rows across all reasons.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Logs a summary line per non-zero reason.
    pub fn log_summary(&self) {
        if self.total() == 0 {
            return;
        }
        log::info!("Skipped {} row(s) without required fields:", self.total());
        for reason in SkipReason::iter() {
            let count = self.get(reason);
            if count > 0 {
                log::info!("   {}: {}", reason, count);
            }
        }
    }
}

impl Default for SkipStats {
    fn default() -> Self {
        Self::new()
    }
}
