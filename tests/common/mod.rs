#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// The expected license header text as it appears in files, with a
/// placeholder for the year-and-owner text.
pub const LICENSE_BODY: &str = r#"Copyright {owner}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

/// Renders the license header for `owner`, each line behind `prefix`,
/// followed by the blank line that closes the header block.
pub fn line_header(owner: &str, prefix: &str) -> String {
  let body = LICENSE_BODY.replace("{owner}", owner);
  let mut out = String::new();
  for line in body.trim().lines() {
    if line.is_empty() {
      out.push_str(prefix.trim_end());
    } else {
      out.push_str(prefix);
      out.push_str(line);
    }
    out.push('\n');
  }
  out.push('\n');
  out
}

/// Renders the license header for `owner` wrapped in a `/* ... */` block,
/// followed by the blank line that closes the header block.
pub fn block_header(owner: &str) -> String {
  let body = LICENSE_BODY.replace("{owner}", owner);
  let mut out = String::from("/*\n");
  for line in body.trim().lines() {
    out.push_str(line);
    out.push('\n');
  }
  out.push_str("*/\n\n");
  out
}

/// Checks if git is available on the system.
pub fn is_git_available() -> bool {
  Command::new("git").arg("--version").status().is_ok()
}

/// Runs a git command in the given directory, returning an error with stderr
/// on failure.
pub fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
  let output = Command::new("git")
    .args(args)
    .current_dir(dir)
    .output()
    .with_context(|| format!("Failed to execute git {:?}", args))?;

  if !output.status.success() {
    anyhow::bail!("git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
  }
  Ok(())
}

/// Initializes a git repository in the given directory with deterministic
/// settings.
///
/// Configures:
/// - Default branch name set to `main`
/// - User name and email for commits
/// - Disables commit signing for test isolation
pub fn init_git_repo(dir: &Path) -> Result<()> {
  run_git(dir, &["init"])?;
  run_git(dir, &["config", "init.defaultBranch", "main"])?;
  run_git(dir, &["branch", "-M", "main"])?;
  run_git(dir, &["config", "user.name", "Test User"])?;
  run_git(dir, &["config", "user.email", "test@example.com"])?;
  // Disable commit signing for test isolation
  run_git(dir, &["config", "commit.gpgsign", "false"])?;
  Ok(())
}

/// Creates a commit with all staged changes.
pub fn git_commit(dir: &Path, message: &str) -> Result<()> {
  run_git(dir, &["commit", "-m", message])
}

/// Stages everything and creates a commit.
pub fn git_add_all_and_commit(dir: &Path, message: &str) -> Result<()> {
  run_git(dir, &["add", "."])?;
  git_commit(dir, message)
}
