//! # Scanner Module
//!
//! Core orchestration: obtain the tracked-file list, filter it down to
//! candidate source files, check each one against the header matcher, and
//! accumulate the results.
//!
//! The scan is strictly sequential. Per-file header failures are reported
//! through a caller-supplied callback as they are found and never abort the
//! scan; listing-tool failures abort immediately with a [`ListingError`].

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::file_filter::ExtensionFilter;
use crate::lister::FileLister;
use crate::matcher::HeaderMatcher;
use crate::verbose_log;

/// Fatal failures of the file-listing tool.
///
/// Either condition means no scanning takes place and no partial owner
/// report is produced.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
  /// The listing tool wrote to its error stream.
  #[error("{}", String::from_utf8_lossy(.0))]
  ToolError(Vec<u8>),
  /// The listing tool exited with a non-zero status and no error text.
  #[error("Return code {0}")]
  ToolStatus(i32),
}

/// Accumulated results of one scan.
#[derive(Debug, Default)]
pub struct ScanOutcome {
  /// Distinct copyright-owner strings, in byte-wise lexicographic order.
  pub owners: BTreeSet<Vec<u8>>,
  /// Candidate files that did not begin with the license header, in scan
  /// order.
  pub missing: Vec<Vec<u8>>,
  /// Number of candidate files checked.
  pub checked: usize,
}

/// Orchestrates one full repository scan.
pub struct Scanner {
  matcher: HeaderMatcher,
  filter: ExtensionFilter,
  lister: Box<dyn FileLister>,
  base_dir: PathBuf,
}

impl Scanner {
  /// Creates a scanner that resolves file paths against the current working
  /// directory, matching where the lister's relative paths are rooted.
  pub fn new(matcher: HeaderMatcher, lister: Box<dyn FileLister>) -> Self {
    Self::with_base_dir(matcher, lister, PathBuf::from("."))
  }

  /// Creates a scanner that resolves file paths against `base_dir`.
  pub fn with_base_dir(matcher: HeaderMatcher, lister: Box<dyn FileLister>, base_dir: PathBuf) -> Self {
    Self {
      matcher,
      filter: ExtensionFilter::new(),
      lister,
      base_dir,
    }
  }

  /// Runs one full scan.
  ///
  /// `on_missing` is invoked immediately, in scan order, with the raw path
  /// bytes of each candidate file that lacks the header.
  ///
  /// # Errors
  ///
  /// Returns a [`ListingError`] if the listing tool reported error text or a
  /// non-zero exit status (error text takes priority as the reported cause),
  /// and a contextual error if the tool could not be launched, a candidate
  /// file could not be read, or a tracked path is not valid UTF-8. A file
  /// merely missing its header is not an error.
  pub fn scan(&self, mut on_missing: impl FnMut(&[u8])) -> Result<ScanOutcome> {
    let listing = self.lister.list_files()?;

    if !listing.stderr.is_empty() {
      return Err(ListingError::ToolError(listing.stderr).into());
    }
    if listing.status != 0 {
      return Err(ListingError::ToolStatus(listing.status).into());
    }

    let mut files: Vec<&[u8]> = listing.stdout.split(|&b| b == 0).collect();
    files.sort_unstable();

    let mut outcome = ScanOutcome::default();

    for path in files {
      if !self.filter.is_candidate(path) {
        continue;
      }

      let path_str = std::str::from_utf8(path)
        .with_context(|| format!("Tracked path is not valid UTF-8: {}", String::from_utf8_lossy(path)))?;
      let full_path = self.base_dir.join(path_str);

      verbose_log!("Checking: {}", path_str);

      let contents =
        fs::read(&full_path).with_context(|| format!("Failed to read {}", full_path.display()))?;
      outcome.checked += 1;

      match self.matcher.check(&contents) {
        Some(owner) => {
          outcome.owners.insert(owner.to_vec());
        }
        None => {
          on_missing(path);
          outcome.missing.push(path.to_vec());
        }
      }
    }

    Ok(outcome)
  }
}
