use std::process::Command;

/// Embed a short commit id for `jichul --version`. A preset
/// `JICHUL_BUILD_SHA` (e.g. from a release pipeline) wins over git.
fn main() {
    println!("cargo:rerun-if-env-changed=JICHUL_BUILD_SHA");
    println!("cargo:rerun-if-changed=../.git/HEAD");

    let sha = std::env::var("JICHUL_BUILD_SHA")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(git_short_sha)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=JICHUL_BUILD_SHA={sha}");
}

fn git_short_sha() -> Option<String> {
    let root = std::env::var("CARGO_MANIFEST_DIR").ok()?;
    let out = Command::new("git")
        .args(["-C", &format!("{root}/.."), "rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
