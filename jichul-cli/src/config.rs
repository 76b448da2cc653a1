use anyhow::{Context, Result};
use jichul_core::{CategoryRuleSet, MatchOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::state::{ensure_jichul_home, jichul_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub rules: RulesSection,
    pub matching: MatchingSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesSection {
    /// Rule file to use instead of the built-in rules.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingSection {
    /// Overrides the rule file's `[matching] case_sensitive` when set.
    pub case_sensitive: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub preview_rows: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self { preview_rows: 20 }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(jichul_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        debug!(path = %p.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = ensure_jichul_home()?.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// Build the rule set for this run. Precedence: `--rules` flag, then
/// `[rules] path`, then the built-in rules. A case flag, else
/// `[matching] case_sensitive`, overrides whatever the rule file says.
pub fn load_rule_set(
    cfg: &Config,
    rules_flag: Option<&Path>,
    case_flag: Option<bool>,
) -> Result<CategoryRuleSet> {
    let rules = match rules_flag.or(cfg.rules.path.as_deref()) {
        Some(path) => {
            let s = fs::read_to_string(path)
                .with_context(|| format!("read rules {}", path.display()))?;
            CategoryRuleSet::from_toml(&s)
                .with_context(|| format!("load rules {}", path.display()))?
        }
        None => CategoryRuleSet::builtin().context("load built-in rules")?,
    };

    Ok(match case_flag.or(cfg.matching.case_sensitive) {
        Some(case_sensitive) => rules.with_options(MatchOptions { case_sensitive }),
        None => rules,
    })
}
