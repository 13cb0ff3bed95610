//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_JSON_OUTPUT_PATH, DEFAULT_SQL_OUTPUT_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace, including skipped rows
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use banned_words_import::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("words.csv"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Banned words CSV to read
    pub input: PathBuf,

    /// Destination of the SQL INSERT script
    pub sql_output: PathBuf,

    /// Destination of the JSON export; the import-call script is written next to it
    pub json_output: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            sql_output: PathBuf::from(DEFAULT_SQL_OUTPUT_PATH),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// Every option has a default, so the tool runs with no arguments.
///
/// # Examples
///
/// ```bash
/// # Use the default paths
/// banned_words_import
///
/// # Custom input and outputs
/// banned_words_import words.csv --sql-output out/import.sql --json-output out/words.json
///
/// # Show every skipped row
/// banned_words_import words.csv --log-level debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "banned_words_import",
    about = "Converts a banned words CSV into SQL and JSON import files."
)]
pub struct Opt {
    /// CSV file to read (UTF-8, optionally with BOM, or Big5)
    #[arg(value_parser, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output path of the SQL INSERT script
    #[arg(long, value_parser, default_value = DEFAULT_SQL_OUTPUT_PATH)]
    pub sql_output: PathBuf,

    /// Output path of the JSON export.
    /// The import-call script is written next to it as `<name>_import.sql`.
    #[arg(long, value_parser, default_value = DEFAULT_JSON_OUTPUT_PATH)]
    pub json_output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            sql_output: opt.sql_output,
            json_output: opt.json_output,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_default_config_uses_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.sql_output, PathBuf::from(DEFAULT_SQL_OUTPUT_PATH));
        assert_eq!(config.json_output, PathBuf::from(DEFAULT_JSON_OUTPUT_PATH));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
    }

    #[test]
    fn test_opt_without_arguments_matches_default_config() {
        let opt = Opt::try_parse_from(["banned_words_import"]).expect("no arguments are required");
        let config = Config::from(opt);
        let default = Config::default();

        assert_eq!(config.input, default.input);
        assert_eq!(config.sql_output, default.sql_output);
        assert_eq!(config.json_output, default.json_output);
    }

    #[test]
    fn test_opt_overrides() {
        let opt = Opt::try_parse_from([
            "banned_words_import",
            "words.csv",
            "--sql-output",
            "out/a.sql",
            "--json-output",
            "out/a.json",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        let config = Config::from(opt);

        assert_eq!(config.input, PathBuf::from("words.csv"));
        assert_eq!(config.sql_output, PathBuf::from("out/a.sql"));
        assert_eq!(config.json_output, PathBuf::from("out/a.json"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_opt_rejects_unknown_log_level() {
        assert!(Opt::try_parse_from(["banned_words_import", "--log-level", "loud"]).is_err());
    }
}
