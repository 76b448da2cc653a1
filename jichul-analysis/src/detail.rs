//! Individual expenses for one month and category.

use jichul_core::{AnnotatedRow, YearMonth};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub year_month: YearMonth,
    pub category: String,
    /// Matching rows, oldest first.
    pub rows: Vec<AnnotatedRow>,
    pub total: f64,
}

impl Detail {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn detail(rows: &[AnnotatedRow], month: YearMonth, category: &str) -> Detail {
    let mut picked: Vec<AnnotatedRow> = rows
        .iter()
        .filter(|r| month.contains(r.date) && r.category == category)
        .cloned()
        .collect();
    picked.sort_by_key(|r| r.date);
    let total: f64 = picked.iter().map(|r| r.amount).sum();
    Detail {
        year_month: month,
        category: category.to_string(),
        rows: picked,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(m: u32, d: u32, desc: &str, amount: f64, cat: &str) -> AnnotatedRow {
        AnnotatedRow {
            date: NaiveDate::from_ymd_opt(2025, m, d).unwrap(),
            description: desc.to_string(),
            amount,
            category: cat.to_string(),
        }
    }

    #[test]
    fn test_detail_sorted_by_date_with_total() {
        let rows = vec![
            row(9, 20, "저녁", 20000.0, "식비"),
            row(9, 1, "점심 식사", 12000.0, "식비"),
            row(9, 1, "택시", 8000.0, "교통"),
            row(10, 1, "점심", 9000.0, "식비"),
        ];
        let d = detail(&rows, "2025-09".parse().unwrap(), "식비");
        assert_eq!(d.count(), 2);
        assert_eq!(d.total, 32000.0);
        assert_eq!(d.rows[0].description, "점심 식사");
        assert_eq!(d.rows[1].description, "저녁");
    }

    #[test]
    fn test_detail_empty_when_nothing_matches() {
        let rows = vec![row(9, 1, "택시", 8000.0, "교통")];
        let d = detail(&rows, "2025-09".parse().unwrap(), "식비");
        assert!(d.is_empty());
        assert_eq!(d.total, 0.0);
    }
}
