//! Ordered keyword rules mapping descriptions to spending categories.
//!
//! A rule set is built once (from the embedded defaults, a TOML file, or code)
//! and is immutable afterwards. Rule order is priority: the first rule whose
//! keyword occurs in a description decides its category.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::classifier::{self, normalize};

const BUILTIN_RULES: &str = include_str!("../rules/default.toml");

/// One category and the keyword substrings that indicate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl Rule {
    pub fn new<I, S>(category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// How descriptions are compared against keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchOptions {
    /// When false (the default) both sides are lowercased before matching.
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Error, Debug)]
pub enum RuleSetError {
    #[error("rule #{index}: category is empty")]
    EmptyCategory { index: usize },
    #[error("rule '{category}': keyword #{index} is empty")]
    EmptyKeyword { category: String, index: usize },
    #[error("rule '{category}': no keywords")]
    NoKeywords { category: String },
    #[error("invalid rule file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk rule file layout.
#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    matching: MatchOptions,
    #[serde(default, rename = "rule")]
    rules: Vec<Rule>,
}

/// Immutable, priority-ordered collection of category rules.
#[derive(Debug, Clone)]
pub struct CategoryRuleSet {
    rules: Vec<Rule>,
    /// Keywords per rule, normalized with `options`.
    needles: Vec<Vec<String>>,
    options: MatchOptions,
}

impl CategoryRuleSet {
    /// Validate and build a rule set. Categories and keywords are trimmed.
    pub fn new(rules: Vec<Rule>, options: MatchOptions) -> Result<Self, RuleSetError> {
        let mut cleaned = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            let category = rule.category.trim().to_string();
            if category.is_empty() {
                return Err(RuleSetError::EmptyCategory { index });
            }
            if rule.keywords.is_empty() {
                return Err(RuleSetError::NoKeywords { category });
            }
            let mut keywords = Vec::with_capacity(rule.keywords.len());
            for (i, kw) in rule.keywords.iter().enumerate() {
                let kw = kw.trim();
                if kw.is_empty() {
                    return Err(RuleSetError::EmptyKeyword {
                        category,
                        index: i,
                    });
                }
                keywords.push(kw.to_string());
            }
            cleaned.push(Rule { category, keywords });
        }
        Ok(Self::compile(cleaned, options))
    }

    /// The rule set compiled into the binary (`rules/default.toml`).
    pub fn builtin() -> Result<Self, RuleSetError> {
        Self::from_toml(BUILTIN_RULES)
    }

    /// Parse a rule file: optional `[matching]` table plus ordered `[[rule]]` entries.
    pub fn from_toml(content: &str) -> Result<Self, RuleSetError> {
        let file: RuleFile = toml::from_str(content)?;
        Self::new(file.rules, file.matching)
    }

    /// Same rules, different matching options.
    pub fn with_options(self, options: MatchOptions) -> Self {
        Self::compile(self.rules, options)
    }

    fn compile(rules: Vec<Rule>, options: MatchOptions) -> Self {
        let needles = rules
            .iter()
            .map(|r| r.keywords.iter().map(|k| normalize(k, options)).collect())
            .collect();
        debug!(
            rules = rules.len(),
            case_sensitive = options.case_sensitive,
            "compiled category rule set"
        );
        Self {
            rules,
            needles,
            options,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every label this rule set can produce, in priority order, ending with the fallback.
    pub fn labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.rules {
            if !out.contains(&r.category.as_str()) {
                out.push(&r.category);
            }
        }
        if !out.contains(&classifier::FALLBACK_CATEGORY) {
            out.push(classifier::FALLBACK_CATEGORY);
        }
        out
    }

    /// First rule with a keyword contained in an already-normalized description.
    pub(crate) fn first_match(&self, haystack: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .zip(&self.needles)
            .find(|(_, needles)| needles.iter().any(|n| haystack.contains(n.as_str())))
            .map(|(rule, _)| rule)
    }

    pub fn classify(&self, description: &str) -> &str {
        classifier::classify(description, self)
    }
}
