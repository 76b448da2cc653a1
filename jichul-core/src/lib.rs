//! jichul-core: transaction types and the keyword category engine
//! (rule set, classifier, dataset annotator).

pub mod annotator;
pub mod classifier;
pub mod month;
pub mod rules;
pub mod transaction;

pub use annotator::annotate;
pub use classifier::{FALLBACK_CATEGORY, classify, classify_opt};
pub use month::YearMonth;
pub use rules::{CategoryRuleSet, MatchOptions, Rule, RuleSetError};
pub use transaction::{AnnotatedRow, TransactionRow};
