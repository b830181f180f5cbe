//! # Report Module
//!
//! This module provides functionality for generating a machine-readable JSON
//! report of a scan, for archiving scan results or feeding dashboards.
//!
//! The report is opt-in (`--report-json`); the default console output never
//! depends on this module.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::scanner::ScanOutcome;

/// Machine-readable summary of one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
  /// Local timestamp the report was generated at.
  pub generated: String,
  /// Number of candidate files checked.
  pub files_checked: usize,
  /// Paths of candidate files missing the license header, in scan order.
  pub missing: Vec<String>,
  /// Distinct copyright owners, sorted.
  pub owners: Vec<String>,
}

impl ScanReport {
  /// Builds a report from a scan outcome.
  ///
  /// Paths and owners are decoded lossily; the console output remains the
  /// byte-exact source of truth.
  pub fn from_outcome(outcome: &ScanOutcome) -> Self {
    Self {
      generated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
      files_checked: outcome.checked,
      missing: outcome
        .missing
        .iter()
        .map(|path| String::from_utf8_lossy(path).into_owned())
        .collect(),
      owners: outcome
        .owners
        .iter()
        .map(|owner| String::from_utf8_lossy(owner).into_owned())
        .collect(),
    }
  }
}

/// Serializes a scan outcome as pretty-printed JSON and writes it to `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json_report(path: &Path, outcome: &ScanOutcome) -> Result<()> {
  let report = ScanReport::from_outcome(outcome);
  let content = serde_json::to_string_pretty(&report).with_context(|| "Failed to serialize scan report")?;

  fs::write(path, content).with_context(|| format!("Failed to write report to {}", path.display()))
}
