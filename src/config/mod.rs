//! Application configuration and constants.
//!
//! This module provides:
//! - Default file locations and downstream schema identifiers
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
