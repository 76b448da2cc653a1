//! Row-wise classification of a loaded dataset.

use tracing::debug;

use crate::classifier::{FALLBACK_CATEGORY, classify};
use crate::rules::CategoryRuleSet;
use crate::transaction::{AnnotatedRow, TransactionRow};

/// Attach a category to every row. Output has the same length and order as
/// `rows`; rows with an empty description get the fallback label.
pub fn annotate(rows: &[TransactionRow], rules: &CategoryRuleSet) -> Vec<AnnotatedRow> {
    let annotated: Vec<AnnotatedRow> = rows
        .iter()
        .map(|row| AnnotatedRow::from_row(row, classify(&row.description, rules)))
        .collect();

    let unmatched = annotated
        .iter()
        .filter(|r| r.category == FALLBACK_CATEGORY)
        .count();
    debug!(rows = annotated.len(), unmatched, "annotated dataset");

    annotated
}
