//! Application initialization.
//!
//! The converter holds no shared resources, so the only global set up here is
//! the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
