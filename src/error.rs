use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
/// Batch error
pub enum BatchError {
    #[error("ItemWriter from: {0}")]
    ItemWriter(String),

    #[error("ItemReader from: {0}")]
    ItemReader(String),

    /// A row carries fewer positional fields than the record needs.
    #[error("Malformed row at line {line}: found {found} field(s), expected at least {expected}")]
    MalformedRow {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("Unable to open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },
}
