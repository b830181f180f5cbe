//! # Output Module
//!
//! This module centralizes all user-facing stdout output for the headercheck
//! tool.
//!
//! ## Design Goals
//!
//! - **Stable**: the default output format is fixed and machine-greppable
//! - **Scriptable**: quiet mode prints bare failing paths, nothing else
//! - **Readable**: colors highlight failures when writing to a terminal, and
//!   degrade to plain text when piped

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::scanner::ScanOutcome;

/// Print the failure line for a candidate file missing the license header.
///
/// Default output: `*** No license text: <path>`. In quiet mode only the
/// bare path is printed, for scripting.
pub fn print_missing_header(path: &[u8]) {
  let display_path = String::from_utf8_lossy(path);

  if is_quiet() {
    println!("{display_path}");
    return;
  }

  println!(
    "{} No license text: {}",
    "***".if_supports_color(Stream::Stdout, |s| s.red()),
    display_path
  );
}

/// Print the deduplicated owner summary.
///
/// One header line, then each distinct owner two-space indented, in the
/// outcome's sorted order. Suppressed entirely in quiet mode.
pub fn print_owner_summary(outcome: &ScanOutcome) {
  if is_quiet() {
    return;
  }

  println!(
    "{}",
    "Copyright owners:".if_supports_color(Stream::Stdout, |s| s.bold())
  );
  for owner in &outcome.owners {
    println!("  {}", String::from_utf8_lossy(owner));
  }
}
