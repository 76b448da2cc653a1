//! Load an expense CSV into typed rows.
//!
//! Expected layout (header names may be English or Korean aliases):
//!   date,description,amount
//!   2025-09-01,점심 식사,12000
//!
//! Input must be UTF-8; a leading BOM is dropped. Rows with an unparseable
//! date or amount are skipped and reported, not fatal.

use jichul_core::TransactionRow;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

use crate::columns::ColumnMap;
use crate::parse::{AMOUNT_NOISE, parse_amount, parse_date};
use crate::types::{IngestError, LoadedCsv, SkippedRow};

/// Read and parse an expense CSV file.
pub fn load_expense_csv(path: impl AsRef<Path>) -> Result<LoadedCsv, IngestError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read expense csv");
    load_expense_csv_bytes(&bytes)
}

/// Parse expense CSV content already in memory.
pub fn load_expense_csv_bytes(bytes: &[u8]) -> Result<LoadedCsv, IngestError> {
    let text = std::str::from_utf8(bytes).map_err(|e| IngestError::Encoding(e.valid_up_to()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns = ColumnMap::resolve(rdr.headers()?)?;
    if columns.description.is_none() {
        warn!("no description column; every row will be classified as the fallback category");
    }

    let noise = Regex::new(AMOUNT_NOISE)?;
    let mut out = LoadedCsv {
        has_description: columns.description.is_some(),
        ..LoadedCsv::default()
    };

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(|f| f.is_empty()) {
            out.skipped.push(SkippedRow {
                line,
                reason: "blank row".to_string(),
            });
            continue;
        }

        let date_raw = record.get(columns.date).unwrap_or("");
        let Some(date) = parse_date(date_raw) else {
            warn!(line, value = date_raw, "skipping row with unparseable date");
            out.skipped.push(SkippedRow {
                line,
                reason: format!("invalid date '{date_raw}'"),
            });
            continue;
        };

        let amount_raw = record.get(columns.amount).unwrap_or("");
        let Some(amount) = parse_amount(amount_raw, &noise) else {
            warn!(line, value = amount_raw, "skipping row with unparseable amount");
            out.skipped.push(SkippedRow {
                line,
                reason: format!("invalid amount '{amount_raw}'"),
            });
            continue;
        };

        let description = columns
            .description
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .to_string();

        out.rows.push(TransactionRow {
            date,
            description,
            amount,
        });
    }

    if out.rows.is_empty() {
        return Err(IngestError::NoDataRows);
    }

    debug!(rows = out.rows.len(), skipped = out.skipped.len(), "parsed expense csv");
    Ok(out)
}
