//! Totals by month and by category.

use jichul_core::{AnnotatedRow, YearMonth};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::pivot::Pivot;

/// Spending for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub year_month: YearMonth,
    pub amount: f64,
    pub count: usize,
}

/// Spending for one category over some set of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub count: usize,
}

/// Monthly totals in chronological order.
pub fn monthly_totals(rows: &[AnnotatedRow]) -> Vec<MonthlyTotal> {
    let mut groups: BTreeMap<YearMonth, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.year_month()).or_insert((0.0, 0));
        entry.0 += row.amount;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(year_month, (amount, count))| MonthlyTotal {
            year_month,
            amount,
            count,
        })
        .collect()
}

/// Category totals, largest amount first. Equal amounts are ordered by name.
pub fn category_totals(rows: &[AnnotatedRow]) -> Vec<CategoryTotal> {
    category_totals_of(rows.iter())
}

/// Category totals restricted to one month, largest amount first.
pub fn month_category_totals(rows: &[AnnotatedRow], month: YearMonth) -> Vec<CategoryTotal> {
    category_totals_of(rows.iter().filter(|r| month.contains(r.date)))
}

fn category_totals_of<'a>(rows: impl Iterator<Item = &'a AnnotatedRow>) -> Vec<CategoryTotal> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.category.as_str()).or_insert((0.0, 0));
        entry.0 += row.amount;
        entry.1 += 1;
    }
    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (amount, count))| CategoryTotal {
            category: category.to_string(),
            amount,
            count,
        })
        .collect();
    // Stable sort keeps name order for ties.
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals
}

/// Distinct months present in `rows`, oldest first.
pub fn months(rows: &[AnnotatedRow]) -> Vec<YearMonth> {
    rows.iter()
        .map(AnnotatedRow::year_month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Everything the overview shows for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub row_count: usize,
    pub total: f64,
    pub monthly: Vec<MonthlyTotal>,
    pub by_category: Vec<CategoryTotal>,
    pub pivot: Pivot,
}

impl Analysis {
    pub fn from_rows(rows: &[AnnotatedRow]) -> Self {
        let analysis = Self {
            row_count: rows.len(),
            total: rows.iter().map(|r| r.amount).sum(),
            monthly: monthly_totals(rows),
            by_category: category_totals(rows),
            pivot: Pivot::build(rows),
        };
        debug!(
            rows = analysis.row_count,
            months = analysis.monthly.len(),
            categories = analysis.by_category.len(),
            "built analysis"
        );
        analysis
    }
}
