//! Configuration constants.
//!
//! Default file locations and the fixed identifiers of the downstream schema.

/// Input CSV read when no path is given on the command line.
pub const DEFAULT_INPUT_PATH: &str = "VoteChaos_BannedWords_V5.csv";

/// SQL INSERT script written when no path is given.
pub const DEFAULT_SQL_OUTPUT_PATH: &str = "import_banned_words.sql";

/// JSON export written when no path is given.
/// The import-call script lands next to it (see [`IMPORT_CALL_SUFFIX`]).
pub const DEFAULT_JSON_OUTPUT_PATH: &str = "banned_words.json";

/// Target table. Must carry a unique constraint over `(keyword, level)`.
pub const BANNED_WORDS_TABLE: &str = "public.banned_words";

/// Stored function (schema `public`) accepting a JSONB array of records.
pub const IMPORT_FUNCTION: &str = "import_banned_words_from_csv";

/// Replaces the JSON file extension to name the import-call script.
pub const IMPORT_CALL_SUFFIX: &str = "_import.sql";
