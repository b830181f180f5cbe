//! # File Lister Module
//!
//! This module contains the interface and production implementation for
//! enumerating version-controlled files. The scanner talks to the listing
//! tool only through the [`FileLister`] trait, so tests can substitute a
//! fake implementation without invoking a real external tool.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

use crate::verbose_log;

/// Raw output captured from one invocation of the file-listing tool.
#[derive(Debug, Clone)]
pub struct Listing {
  /// Standard output: null-separated relative file paths.
  pub stdout: Vec<u8>,
  /// Standard error: any tool-level error text.
  pub stderr: Vec<u8>,
  /// Exit status of the tool; `0` on success.
  pub status: i32,
}

/// Trait for listing the tracked files of a repository.
pub trait FileLister: Send + Sync {
  /// Runs the listing tool once and captures its output verbatim.
  ///
  /// # Errors
  ///
  /// Returns an error only if the tool could not be launched at all. A tool
  /// that runs but reports a problem does so through [`Listing::stderr`] and
  /// [`Listing::status`]; interpreting those is the caller's concern.
  fn list_files(&self) -> Result<Listing>;
}

/// Lists tracked files by running `git ls-files -z`.
#[derive(Debug, Default)]
pub struct GitLister {
  /// Directory to run git in; the process working directory when `None`.
  dir: Option<PathBuf>,
}

impl GitLister {
  /// Creates a lister that runs in the current working directory.
  pub const fn new() -> Self {
    Self { dir: None }
  }

  /// Creates a lister that runs in an explicit directory.
  pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
    Self { dir: Some(dir.into()) }
  }
}

impl FileLister for GitLister {
  fn list_files(&self) -> Result<Listing> {
    verbose_log!("Running: git ls-files -z");

    let mut command = Command::new("git");
    command.args(["ls-files", "-z"]);
    if let Some(ref dir) = self.dir {
      command.current_dir(dir);
    }

    let output = command
      .output()
      .with_context(|| "Failed to execute git ls-files")?;

    Ok(Listing {
      stdout: output.stdout,
      stderr: output.stderr,
      // A status with no code means the tool died on a signal; surface that
      // as a failure code rather than success.
      status: output.status.code().unwrap_or(-1),
    })
  }
}
