//! # headercheck
//!
//! A tool that verifies every tracked source file of selected extensions
//! begins with the expected copyright license header, and reports the
//! distinct copyright owners found across the repository.
//!
//! `headercheck` never modifies files. It asks the version-control tool for
//! the tracked file list, checks each candidate file's first bytes against a
//! fixed license header rule, reports files where the header is missing, and
//! prints a deduplicated, sorted list of the copyright owners it extracted.
//!
//! ## Features
//!
//! * Scans exactly the files git tracks, in deterministic order
//! * One precompiled header rule, built once and reused for every file
//! * Tolerates `#`/space comment prefixes and `/* ... */` block wrappers
//! * Per-file failures are reported without aborting the scan or failing the
//!   process
//! * Optional JSON report of the scan results
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use headercheck::lister::GitLister;
//! use headercheck::matcher::HeaderMatcher;
//! use headercheck::scanner::Scanner;
//!
//! fn main() -> anyhow::Result<()> {
//!     let matcher = HeaderMatcher::new()?;
//!     let scanner = Scanner::new(matcher, Box::new(GitLister::new()));
//!
//!     let outcome = scanner.scan(|path| {
//!         println!("*** No license text: {}", String::from_utf8_lossy(path));
//!     })?;
//!
//!     println!("Copyright owners:");
//!     for owner in &outcome.owners {
//!         println!("  {}", String::from_utf8_lossy(owner));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`scanner`] - Core orchestration of one repository scan
//! * [`matcher`] - The compiled license header rule
//! * [`lister`] - The version-control file-listing collaborator
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`scanner`]: crate::scanner
//! [`matcher`]: crate::matcher
//! [`lister`]: crate::lister
//! [`logging`]: crate::logging

pub mod cli;
pub mod file_filter;
pub mod lister;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod report;
pub mod scanner;
pub mod template;
