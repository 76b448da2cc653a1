//! Transaction row types flowing from the loader into aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::month::YearMonth;

/// A normalized expense row as produced by the CSV loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRow {
    /// Date of the expense (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Free-text description; empty when the source had none
    #[serde(default)]
    pub description: String,
    /// Amount spent
    pub amount: f64,
}

impl TransactionRow {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// A transaction row plus the category assigned by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl AnnotatedRow {
    pub fn from_row(row: &TransactionRow, category: impl Into<String>) -> Self {
        Self {
            date: row.date,
            description: row.description.clone(),
            amount: row.amount,
            category: category.into(),
        }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_row_keeps_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let row = TransactionRow::new(date, "점심 식사", 12000.0);
        let annotated = AnnotatedRow::from_row(&row, "식비");
        assert_eq!(annotated.date, date);
        assert_eq!(annotated.description, "점심 식사");
        assert_eq!(annotated.amount, 12000.0);
        assert_eq!(annotated.category, "식비");
        assert_eq!(annotated.year_month().to_string(), "2025-09");
    }

    #[test]
    fn test_row_serializes_date_as_iso() {
        let row = TransactionRow::new(NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(), "편의점 간식", 3800.0);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["date"], "2025-10-05");
        assert_eq!(json["amount"], 3800.0);
    }
}
