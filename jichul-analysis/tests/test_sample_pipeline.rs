use jichul_analysis::{Analysis, detail, month_category_totals};
use jichul_core::{CategoryRuleSet, FALLBACK_CATEGORY, MatchOptions, Rule, annotate};
use jichul_ingest::{SAMPLE_CSV, load_expense_csv};
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("expense_sample.csv")
}

/// The repo-root sample matches the built-in sample download.
#[test]
fn test_sample_file_matches_embedded_sample() {
    let on_disk = std::fs::read_to_string(sample_path()).unwrap();
    assert_eq!(on_disk, SAMPLE_CSV);
}

/// Loader → annotator → aggregation over the sample with built-in rules.
#[test]
fn test_sample_with_builtin_rules() {
    let loaded = load_expense_csv(sample_path()).unwrap();
    assert!(loaded.skipped.is_empty());

    let rules = CategoryRuleSet::builtin().unwrap();
    let rows = annotate(&loaded.rows, &rules);
    let cats: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats, vec!["식비", "교통", "교육", "식비", FALLBACK_CATEGORY]);

    let analysis = Analysis::from_rows(&rows);
    assert_eq!(analysis.total, 562250.0);
    let monthly: Vec<(String, f64)> = analysis
        .monthly
        .iter()
        .map(|m| (m.year_month.to_string(), m.amount))
        .collect();
    assert_eq!(
        monthly,
        vec![
            ("2025-09".to_string(), 58450.0),
            ("2025-10".to_string(), 3800.0),
            ("2025-11".to_string(), 500000.0),
        ]
    );
    assert_eq!(analysis.by_category[0].category, FALLBACK_CATEGORY);
    assert_eq!(analysis.pivot.categories.len(), 4);
}

/// Ordering of rules decides ambiguous rows across the whole pipeline.
#[test]
fn test_rule_order_drives_annotation() {
    let loaded = load_expense_csv(sample_path()).unwrap();
    let transit_first = CategoryRuleSet::new(
        vec![
            Rule::new("교통", ["교통", "지하철", "택시", "편의점"]),
            Rule::new("식비", ["식사", "점심", "간식"]),
        ],
        MatchOptions::default(),
    )
    .unwrap();

    let rows = annotate(&loaded.rows, &transit_first);
    assert_eq!(rows[3].description, "편의점 간식");
    assert_eq!(rows[3].category, "교통");

    let oct = month_category_totals(&rows, "2025-10".parse().unwrap());
    assert_eq!(oct.len(), 1);
    assert_eq!(oct[0].category, "교통");

    let sept_food = detail(&rows, "2025-09".parse().unwrap(), "식비");
    assert_eq!(sept_food.count(), 1);
    assert_eq!(sept_food.total, 12000.0);
}

#[test]
fn test_json_shape() {
    let loaded = load_expense_csv(sample_path()).unwrap();
    let rules = CategoryRuleSet::builtin().unwrap();
    let analysis = Analysis::from_rows(&annotate(&loaded.rows, &rules));
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["row_count"], 5);
    assert_eq!(json["monthly"][0]["year_month"], "2025-09");
    assert_eq!(json["by_category"][0]["category"], "기타");
}
