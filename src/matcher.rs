//! # Header Matcher Module
//!
//! This module decides whether a file's contents begin with the expected
//! license header, and extracts the copyright line when they do.
//!
//! The matching rule is compiled once from the fixed template in
//! [`crate::template`] and is then reused for every file in the scan. It is
//! an explicit, immutable value owned by whoever drives the scan; there is no
//! module-level compiled state.
//!
//! ## Example
//!
//! ```rust
//! use headercheck::matcher::HeaderMatcher;
//!
//! # fn main() -> anyhow::Result<()> {
//! let matcher = HeaderMatcher::new()?;
//!
//! // A file without the header yields no match.
//! assert!(matcher.check(b"fn main() {}\n").is_none());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use regex::bytes::{Regex, RegexBuilder};

use crate::template::LICENSE_TEMPLATE;

/// A compiled rule that recognizes the license header at the start of a file.
///
/// The rule accepts each template line prefixed by any run of `#` or space
/// characters, tolerates a single `/*` line before the header and a single
/// `*/` line after it, and requires a blank line (or end of input) to close
/// the header block. It matches only at the very start of the input and
/// captures the copyright line's year-and-owner text.
pub struct HeaderMatcher {
  rule: Regex,
}

impl HeaderMatcher {
  /// Builds the matcher from the fixed license template.
  ///
  /// # Errors
  ///
  /// Returns an error if the header pattern fails to compile.
  pub fn new() -> Result<Self> {
    Self::from_template(LICENSE_TEMPLATE)
  }

  /// Builds a matcher from a pattern-ready template.
  ///
  /// Each line of `template` becomes one required header line; lines must
  /// already carry their own escaping (see
  /// [`LICENSE_TEMPLATE`](crate::template::LICENSE_TEMPLATE)). Exposed so
  /// tests can exercise rule construction with small templates.
  pub fn from_template(template: &str) -> Result<Self> {
    let mut pattern = String::from(r"\A(?:^/[*]\n)?");
    for line in template.trim().lines() {
      pattern.push_str(r"^[# ]*");
      pattern.push_str(line.trim());
      pattern.push('\n');
    }
    pattern.push_str(r"(?:^[*]/\n)?^$");

    // Byte-oriented with Unicode disabled: file contents are raw bytes and
    // need not be valid UTF-8.
    let rule = RegexBuilder::new(&pattern)
      .multi_line(true)
      .unicode(false)
      .build()
      .with_context(|| "Failed to compile license header pattern")?;

    Ok(Self { rule })
  }

  /// Tests whether `contents` begin with the license header.
  ///
  /// # Returns
  ///
  /// The captured copyright text (year and owner name) when the header is
  /// present at the very start of `contents`, or `None` otherwise. Pure
  /// function of the input bytes and the precompiled rule.
  pub fn check<'c>(&self, contents: &'c [u8]) -> Option<&'c [u8]> {
    self
      .rule
      .captures(contents)
      .and_then(|caps| caps.get(1))
      .map(|owner| owner.as_bytes())
  }
}
