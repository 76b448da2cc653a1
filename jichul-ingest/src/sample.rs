//! The small example dataset users can start from.

/// Five sample expenses in the expected `date,description,amount` layout.
pub const SAMPLE_CSV: &str = "\
date,description,amount
2025-09-01,점심 식사,12000
2025-09-01,지하철 교통비,1450
2025-09-02,온라인 강의 수강료,45000
2025-10-05,편의점 간식,3800
2025-11-10,월세,500000
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_expense_csv_bytes;

    #[test]
    fn test_sample_loads_cleanly() {
        let loaded = load_expense_csv_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(loaded.rows.len(), 5);
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.rows[4].description, "월세");
        assert_eq!(loaded.rows[4].amount, 500000.0);
    }
}
