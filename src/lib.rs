//! banned_words_import library: banned word CSV conversion
//!
//! Reads a CSV file of banned word records and produces the files used to
//! load them into the `public.banned_words` table:
//! - a SQL INSERT script with an `ON CONFLICT (keyword, level)` upsert clause
//! - a JSON array of the records
//! - a SQL script calling `import_banned_words_from_csv` with that array
//!
//! # Example
//!
//! ```no_run
//! use banned_words_import::{run_conversion, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("words.csv"),
//!     ..Default::default()
//! };
//!
//! let report = run_conversion(&config)?;
//! println!("Kept {} of {} rows", report.records, report.rows_read);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod load;
#[allow(missing_docs)]
pub mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ConvertError, SkipReason, SkipStats};
pub use export::{Artifact, ExportOutcome};
pub use load::{load_records, TextEncoding};
pub use models::BannedWord;
pub use run::{run_conversion, ConversionReport};

// Internal run module (load once, emit every output)
mod run {
    use std::path::Path;

    use crate::config::Config;
    use crate::error_handling::{ConvertError, SkipStats};
    use crate::export::{export_json, export_sql, export_sql_call, ExportOutcome};
    use crate::load::{load_records, TextEncoding};

    /// Results of a conversion run.
    #[derive(Debug, Clone)]
    pub struct ConversionReport {
        /// Encoding the input was decoded with
        pub encoding: TextEncoding,
        /// Data rows read from the input
        pub rows_read: usize,
        /// Records that passed the retention check
        pub records: usize,
        /// Rows dropped, by reason
        pub skipped: SkipStats,
        /// One outcome per output file, in the order they were produced
        pub outputs: Vec<ExportOutcome>,
    }

    impl ConversionReport {
        /// True when at least one output file was written.
        pub fn wrote_any(&self) -> bool {
            self.outputs
                .iter()
                .any(|o| matches!(o, ExportOutcome::Written { .. }))
        }
    }

    /// Converts the configured input into the SQL, JSON and SQL-call outputs.
    ///
    /// The input is read and decoded once. With no retained records nothing is
    /// written and every outcome is `ExportOutcome::Empty`.
    ///
    /// # Errors
    ///
    /// Fails before any output is written if the input cannot be read, decoded
    /// or parsed. Fails part way if an output cannot be written; outputs
    /// already written stay in place, the failing one is never left partial.
    pub fn run_conversion(config: &Config) -> Result<ConversionReport, ConvertError> {
        let loaded = load_records(&config.input)?;
        let source_name = source_name(&config.input);

        let outputs = vec![
            export_sql(&loaded.records, &config.sql_output, &source_name)?,
            export_json(&loaded.records, &config.json_output)?,
            export_sql_call(&loaded.records, &config.json_output)?,
        ];

        Ok(ConversionReport {
            encoding: loaded.encoding,
            rows_read: loaded.rows_read,
            records: loaded.records.len(),
            skipped: loaded.skipped,
            outputs,
        })
    }

    fn source_name(input: &Path) -> String {
        input
            .file_name()
            .unwrap_or(input.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

}
