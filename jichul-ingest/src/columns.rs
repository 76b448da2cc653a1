//! Header alias resolution for expense CSVs.

use csv::StringRecord;

use crate::types::IngestError;

const DATE_ALIASES: &[&str] = &["date", "날짜", "일자", "거래일"];
const DESCRIPTION_ALIASES: &[&str] = &["description", "내용", "메모", "적요"];
const AMOUNT_ALIASES: &[&str] = &["amount", "금액", "지출"];

/// Column indexes for the fields the loader reads. Other columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub description: Option<usize>,
    pub amount: usize,
}

impl ColumnMap {
    pub fn resolve(headers: &StringRecord) -> Result<Self, IngestError> {
        let date = find(headers, DATE_ALIASES).ok_or(IngestError::MissingColumn("date"))?;
        let amount = find(headers, AMOUNT_ALIASES).ok_or(IngestError::MissingColumn("amount"))?;
        Ok(Self {
            date,
            description: find(headers, DESCRIPTION_ALIASES),
            amount,
        })
    }
}

fn find(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim().trim_start_matches('\u{feff}').to_ascii_lowercase();
        aliases.contains(&h.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_headers() {
        let h = StringRecord::from(vec!["date", "description", "amount"]);
        let m = ColumnMap::resolve(&h).unwrap();
        assert_eq!(m, ColumnMap { date: 0, description: Some(1), amount: 2 });
    }

    #[test]
    fn test_korean_headers_any_order() {
        let h = StringRecord::from(vec!["금액", "메모", "카드", "날짜"]);
        let m = ColumnMap::resolve(&h).unwrap();
        assert_eq!(m, ColumnMap { date: 3, description: Some(1), amount: 0 });
    }

    #[test]
    fn test_header_case_and_padding() {
        let h = StringRecord::from(vec![" Date ", "DESCRIPTION", "Amount"]);
        assert!(ColumnMap::resolve(&h).is_ok());
    }

    #[test]
    fn test_description_is_optional() {
        let h = StringRecord::from(vec!["date", "amount"]);
        assert_eq!(ColumnMap::resolve(&h).unwrap().description, None);
    }

    #[test]
    fn test_amount_is_required() {
        let h = StringRecord::from(vec!["date", "description"]);
        let err = ColumnMap::resolve(&h).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn("amount")));
    }
}
