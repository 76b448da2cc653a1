//! Terminal rendering for analysis results.

use comfy_table::{Cell, CellAlignment, Table};
use jichul_analysis::{CategoryTotal, Detail, MonthlyTotal, Pivot};
use jichul_core::{AnnotatedRow, CategoryRuleSet, FALLBACK_CATEGORY};

/// Whole-won amount with thousands separators: 1,234,567
pub fn won(val: f64) -> String {
    let negative = val < 0.0;
    let digits = format!("{:.0}", val.abs());

    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative && with_commas != "0" {
        format!("-{with_commas}")
    } else {
        with_commas
    }
}

fn amount_cell(val: f64) -> Cell {
    Cell::new(won(val)).set_alignment(CellAlignment::Right)
}

pub fn preview_table(rows: &[AnnotatedRow], limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["date", "description", "amount", "category"]);
    for r in rows.iter().take(limit) {
        table.add_row(vec![
            Cell::new(r.date.format("%Y-%m-%d")),
            Cell::new(&r.description),
            amount_cell(r.amount),
            Cell::new(&r.category),
        ]);
    }
    table
}

pub fn monthly_table(monthly: &[MonthlyTotal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["year_month", "amount", "count"]);
    for m in monthly {
        table.add_row(vec![
            Cell::new(m.year_month),
            amount_cell(m.amount),
            Cell::new(m.count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn category_table(totals: &[CategoryTotal]) -> Table {
    let grand: f64 = totals.iter().map(|c| c.amount).sum();
    let mut table = Table::new();
    table.set_header(vec!["category", "amount", "%", "count"]);
    for c in totals {
        let pct = if grand != 0.0 { c.amount / grand * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(&c.category),
            amount_cell(c.amount),
            Cell::new(format!("{pct:.1}")).set_alignment(CellAlignment::Right),
            Cell::new(c.count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn pivot_table(pivot: &Pivot) -> Table {
    let mut table = Table::new();
    let mut header = vec!["year_month".to_string()];
    header.extend(pivot.categories.iter().cloned());
    header.push("total".to_string());
    table.set_header(header);
    for (month, cells) in pivot.months.iter().zip(&pivot.cells) {
        let mut row = vec![Cell::new(month)];
        row.extend(cells.iter().map(|v| amount_cell(*v)));
        row.push(amount_cell(pivot.month_total(*month)));
        table.add_row(row);
    }
    table
}

/// Detail listing plus its summary line; the message for an empty selection otherwise.
pub fn detail_text(detail: &Detail) -> String {
    if detail.is_empty() {
        return "해당 월/카테고리에 해당하는 지출 내역이 없습니다.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["date", "description", "amount", "category"]);
    for r in &detail.rows {
        table.add_row(vec![
            Cell::new(r.date.format("%Y-%m-%d")),
            Cell::new(&r.description),
            amount_cell(r.amount),
            Cell::new(&r.category),
        ]);
    }
    format!(
        "총 {}건, 합계 {}원\n{table}",
        detail.count(),
        won(detail.total)
    )
}

pub fn rules_table(rules: &CategoryRuleSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "category", "keywords"]);
    for (i, r) in rules.rules().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.category),
            Cell::new(r.keywords.join(", ")),
        ]);
    }
    table.add_row(vec![
        Cell::new("-"),
        Cell::new(FALLBACK_CATEGORY),
        Cell::new("(no match)"),
    ]);
    table
}
