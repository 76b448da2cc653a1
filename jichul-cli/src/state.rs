use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$JICHUL_HOME`, or `~/.jichul`.
pub fn jichul_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("JICHUL_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".jichul"))
}

pub fn ensure_jichul_home() -> Result<PathBuf> {
    let dir = jichul_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
