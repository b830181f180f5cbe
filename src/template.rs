//! # Template Module
//!
//! This module owns the license header template that every checked source
//! file is expected to carry. The template is fixed at compile time; there
//! is deliberately no way to load a different one at runtime.

/// The expected license header, one template line per text line.
///
/// The template is kept in pattern-ready form so that
/// [`HeaderMatcher`](crate::matcher::HeaderMatcher) can splice each line
/// directly into the compiled rule:
///
/// - The copyright line is the capturing sub-pattern `(\d{4} .*)`, which
///   extracts the year and owner name of a matching header.
/// - Punctuation that would otherwise be a regex metacharacter is written as
///   a single-character class (`[.]`, `[(]`, `[)]`), so it matches the
///   literal character without an extra escaping pass over the lines.
///
/// Leading and trailing blank lines are trimmed during rule construction.
pub const LICENSE_TEMPLATE: &str = r#"
Copyright (\d{4} .*)

Licensed under the Apache License, Version 2[.]0 [(]the "License"[)];
you may not use this file except in compliance with the License[.]
You may obtain a copy of the License at

http://www[.]apache[.]org/licenses/LICENSE-2[.]0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied[.]
See the License for the specific language governing permissions and
limitations under the License[.]
"#;
