//! jichul-analysis: monthly and per-category aggregation over annotated expense rows.

pub mod detail;
pub mod pivot;
pub mod summary;

pub use detail::{Detail, detail};
pub use pivot::Pivot;
pub use summary::{
    Analysis, CategoryTotal, MonthlyTotal, category_totals, month_category_totals, months,
    monthly_totals,
};
