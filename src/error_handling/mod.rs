//! Error handling and skip statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and conversion
//! - Skip reasons for rows dropped by the retention check
//! - Per-reason skip counters

mod stats;
mod types;

// Re-export public API
pub use stats::SkipStats;
pub use types::{ConvertError, InitializationError, SkipReason};
