use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;
use anyhow::{bail, Context, Result};
use regex::Regex;
use crate::report;

static REPO_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":(.+?)\.git\s*$").unwrap());

/// Queries the configured git remote of `project_dir` and derives the bare
/// repository name from its fetch URL.
///
/// All failures (not a repository, no remote configured, unexpected URL
/// shape) are reported on stderr and absorbed: `None` means "no repository
/// name available" and callers skip the manifest updates that depend on it.
pub fn repo_name<P: AsRef<Path>>(project_dir: P) -> Option<String> {
    match remote_repo_name(project_dir.as_ref()) {
        Ok(name) => Some(name),
        Err(e) => {
            report::err(&format!("Error fetching repo name from git config: {e:#}"));
            None
        }
    }
}

fn remote_repo_name(project_dir: &Path) -> Result<String> {
    let url = remote_url(project_dir)?;
    extract_repo_name(&url)
}

/// Runs `git -C <project_dir> config --get remote.origin.url` and returns
/// its stdout.
fn remote_url(project_dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(project_dir)
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .context("Could not run git")?;
    if !output.status.success() {
        bail!("git config --get remote.origin.url failed ({})", output.status);
    }
    Ok(String::from_utf8(output.stdout)?)
}

/// Extracts the bare repository name from a remote URL ending in
/// `:<path>.git`, discarding any owner or group prefix.
fn extract_repo_name(url: &str) -> Result<String> {
    let captures = REPO_NAME.captures(url).with_context(|| {
        format!(
            "Repository name could not be determined from the URL: {}",
            url.trim()
        )
    })?;
    let path = &captures[1];
    let name = path.rsplit('/').next().unwrap_or(path);
    Ok(name.to_string())
}
