use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

/// Everything that can stop an import once configuration has loaded. None of
/// these are recovered from.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Missing or unreadable file, or a record that does not match the
    /// expected columns.
    #[error("Failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Line {line}: invalid timestamp '{value}': {source}")]
    Timestamp {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
