//! Export types.

use std::path::PathBuf;

use strum_macros::Display;

/// The three files a conversion produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Artifact {
    /// Multi-row INSERT with an upsert clause
    #[strum(serialize = "SQL insert script")]
    SqlInsert,
    /// JSON array of records
    #[strum(serialize = "JSON export")]
    Json,
    /// `SELECT` calling the import function with the JSON payload
    #[strum(serialize = "SQL import call")]
    SqlCall,
}

/// What an export did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written (replacing any existing file)
    Written {
        /// Which output this is
        artifact: Artifact,
        /// Destination path
        path: PathBuf,
        /// Number of records in the file
        records: usize,
    },
    /// There were no records, so nothing was written
    Empty {
        /// Which output was skipped
        artifact: Artifact,
    },
}

impl ExportOutcome {
    /// Path of the written file, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ExportOutcome::Written { path, .. } => Some(path),
            ExportOutcome::Empty { .. } => None,
        }
    }

    /// Which output this outcome is about.
    pub fn artifact(&self) -> Artifact {
        match self {
            ExportOutcome::Written { artifact, .. } | ExportOutcome::Empty { artifact } => {
                *artifact
            }
        }
    }
}
