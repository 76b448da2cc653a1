//! Month × category spending table.

use jichul_core::{AnnotatedRow, YearMonth};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Sums of `amount` per (month, category). Months are chronological,
/// categories sorted by name, and missing combinations are 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pivot {
    pub months: Vec<YearMonth>,
    pub categories: Vec<String>,
    /// `cells[i][j]` is the total for `months[i]` and `categories[j]`.
    pub cells: Vec<Vec<f64>>,
}

impl Pivot {
    pub fn build(rows: &[AnnotatedRow]) -> Self {
        let mut sums: BTreeMap<(YearMonth, &str), f64> = BTreeMap::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        for row in rows {
            categories.insert(&row.category);
            *sums.entry((row.year_month(), row.category.as_str())).or_insert(0.0) += row.amount;
        }

        let months: Vec<YearMonth> = sums
            .keys()
            .map(|(m, _)| *m)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let cells = months
            .iter()
            .map(|m| {
                categories
                    .iter()
                    .map(|c| sums.get(&(*m, *c)).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Self {
            months,
            categories: categories.into_iter().map(str::to_string).collect(),
            cells,
        }
    }

    /// Total of one month across all categories.
    pub fn month_total(&self, month: YearMonth) -> f64 {
        self.months
            .iter()
            .position(|m| *m == month)
            .map(|i| self.cells[i].iter().sum::<f64>())
            .unwrap_or(0.0)
    }
}
