//! # File Filter Module
//!
//! This module decides which tracked files are candidates for the header
//! check. Only a fixed set of source extensions is checked; everything else
//! is skipped regardless of content.

/// Extensions whose files must carry the license header.
///
/// Suffix match on the raw path bytes, case-sensitive.
const CANDIDATE_EXTENSIONS: &[&[u8]] = &[b".cc", b".hh", b".py"];

/// Filter that selects candidate files by extension.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionFilter {
  extensions: &'static [&'static [u8]],
}

impl ExtensionFilter {
  /// Creates the filter with the built-in extension allowlist.
  pub const fn new() -> Self {
    Self {
      extensions: CANDIDATE_EXTENSIONS,
    }
  }

  /// Returns `true` if `path` ends with one of the candidate extensions.
  pub fn is_candidate(&self, path: &[u8]) -> bool {
    self.extensions.iter().any(|ext| path.ends_with(ext))
  }
}

impl Default for ExtensionFilter {
  fn default() -> Self {
    Self::new()
  }
}
