//! Field parsers for dates and amounts as they appear in exported statements.

use chrono::NaiveDate;
use regex::Regex;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];

/// Characters stripped from amounts before parsing: currency marks, thousands
/// separators and whitespace.
pub const AMOUNT_NOISE: &str = r"[₩원$,\s]";

/// Parse a date, ignoring any trailing time part ("2025-09-01 13:05").
/// The spaced layout of Korean bank exports ("2025. 9. 1.") is accepted too.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let compact = close_dotted_gaps(raw.trim());
    let day = compact
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()?
        .trim_end_matches('.');
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}

/// Drop spaces following the first two dots, so "2025. 9. 1. 13:05" becomes
/// "2025.9.1. 13:05" and the time part stays separate.
fn close_dotted_gaps(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut dots = 0;
    let mut skipping = false;
    for c in s.chars() {
        if skipping && c == ' ' {
            continue;
        }
        skipping = false;
        if c == '.' {
            dots += 1;
            skipping = dots <= 2;
        }
        out.push(c);
    }
    out
}

/// Parse an amount like "12,000", "₩3,800", "45000원" or "(1,450)".
/// Parentheses mean negative.
pub fn parse_amount(raw: &str, noise: &Regex) -> Option<f64> {
    let cleaned = noise.replace_all(raw.trim(), "");
    let (negative, body) = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, &*cleaned),
    };
    let value: f64 = body.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> Regex {
        Regex::new(AMOUNT_NOISE).unwrap()
    }

    #[test]
    fn test_date_formats() {
        let want = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        for raw in ["2025-09-01", "2025/09/01", "2025.09.01", "2025.09.01.", "20250901", " 2025-09-01 "] {
            assert_eq!(parse_date(raw), Some(want), "{raw}");
        }
    }

    #[test]
    fn test_date_with_time() {
        let want = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        assert_eq!(parse_date("2025-11-10 08:30"), Some(want));
        assert_eq!(parse_date("2025-11-10 08:30:15"), Some(want));
        assert_eq!(parse_date("2025-11-10T08:30:15"), Some(want));
    }

    #[test]
    fn test_spaced_korean_dates() {
        let want = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(parse_date("2025. 9. 1."), Some(want));
        assert_eq!(parse_date("2025. 09. 01"), Some(want));
        assert_eq!(parse_date("2025. 9. 1. 13:05"), Some(want));
        assert_eq!(parse_date("2025.09.01. 13:05"), Some(want));
    }

    #[test]
    fn test_bad_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("어제"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn test_amounts() {
        let re = noise();
        assert_eq!(parse_amount("12000", &re), Some(12000.0));
        assert_eq!(parse_amount("12,000", &re), Some(12000.0));
        assert_eq!(parse_amount("₩3,800", &re), Some(3800.0));
        assert_eq!(parse_amount("45,000원", &re), Some(45000.0));
        assert_eq!(parse_amount("$12.50", &re), Some(12.5));
        assert_eq!(parse_amount("-1450", &re), Some(-1450.0));
        assert_eq!(parse_amount("(1,450)", &re), Some(-1450.0));
    }

    #[test]
    fn test_bad_amounts() {
        let re = noise();
        assert_eq!(parse_amount("", &re), None);
        assert_eq!(parse_amount("원", &re), None);
        assert_eq!(parse_amount("abc", &re), None);
        assert_eq!(parse_amount("NaN", &re), None);
        assert_eq!(parse_amount("inf", &re), None);
    }
}
