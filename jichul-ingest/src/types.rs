use jichul_core::TransactionRow;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file is not valid UTF-8 (first bad byte at offset {0})")]
    Encoding(usize),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("no data rows")]
    NoDataRows,
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A data row the loader dropped, with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Loader output: the parsed rows plus what was left out.
#[derive(Debug, Clone, Default)]
pub struct LoadedCsv {
    pub rows: Vec<TransactionRow>,
    pub skipped: Vec<SkippedRow>,
    /// False when the file had no description-like column.
    pub has_description: bool,
}
