//! Keyword classifier: one description in, one category label out.
//!
//! Matching is substring containment on the trimmed description, lowercased
//! unless the rule set is case-sensitive. There is no word-boundary check,
//! so a keyword also matches inside longer words ("교통" matches "교통비").

use crate::rules::{CategoryRuleSet, MatchOptions};

/// Label for descriptions no rule matches.
pub const FALLBACK_CATEGORY: &str = "기타";

pub(crate) fn normalize(text: &str, options: MatchOptions) -> String {
    let text = text.trim();
    if options.case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

/// Category of the first rule (in priority order) with a keyword contained in
/// `description`, or [`FALLBACK_CATEGORY`]. Never fails.
pub fn classify<'r>(description: &str, rules: &'r CategoryRuleSet) -> &'r str {
    let haystack = normalize(description, rules.options());
    if haystack.is_empty() {
        return FALLBACK_CATEGORY;
    }
    rules
        .first_match(&haystack)
        .map(|rule| rule.category.as_str())
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Like [`classify`], with a missing description treated as empty.
pub fn classify_opt<'r>(description: Option<&str>, rules: &'r CategoryRuleSet) -> &'r str {
    classify(description.unwrap_or_default(), rules)
}
