//! jichul-ingest: expense CSV loading and normalization into `TransactionRow`s.

pub mod columns;
pub mod csv_loader;
pub mod parse;
pub mod sample;
pub mod types;

pub use columns::ColumnMap;
pub use csv_loader::{load_expense_csv, load_expense_csv_bytes};
pub use sample::SAMPLE_CSV;
pub use types::{IngestError, LoadedCsv, SkippedRow};
