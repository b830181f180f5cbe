//! # Scan Command
//!
//! This module implements the repository scan: wiring the matcher, lister,
//! and scanner together, translating fatal listing failures into the
//! documented console output and exit codes, and printing the final owner
//! summary.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::info_log;
use crate::lister::GitLister;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::matcher::HeaderMatcher;
use crate::output::{print_missing_header, print_owner_summary};
use crate::report::write_json_report;
use crate::scanner::{ListingError, Scanner};

/// Arguments for the scan
#[derive(Args, Debug)]
pub struct ScanArgs {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Print only the paths of files missing the header
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Generate a JSON report of the scan and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Run the scan with the given arguments
pub fn run_scan(args: ScanArgs) -> Result<()> {
  // Initialize tracing subscriber for structured diagnostics
  init_tracing(args.quiet, args.verbose);

  // Set output mode for the verbose_log!/info_log! macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let matcher = HeaderMatcher::new().with_context(|| "Failed to build the license header rule")?;
  let scanner = Scanner::new(matcher, Box::new(GitLister::new()));

  debug!("Starting repository scan");

  let outcome = match scanner.scan(print_missing_header) {
    Ok(outcome) => outcome,
    Err(error) => return report_fatal(error),
  };

  debug!(
    checked = outcome.checked,
    missing = outcome.missing.len(),
    owners = outcome.owners.len(),
    "Scan finished"
  );

  print_owner_summary(&outcome);

  if let Some(ref output_path) = args.report_json {
    if let Err(error) = write_json_report(output_path, &outcome) {
      eprintln!("Error generating JSON report: {error:#}");
    } else {
      info_log!("Wrote JSON report to {}", output_path.display());
    }
  }

  // Per-file header failures were already reported; they do not affect the
  // exit status.
  Ok(())
}

/// Translate a fatal scan error into the documented console output and exit
/// status.
///
/// Listing-tool failures have fixed renderings: relayed error text on
/// stderr, or `Return code <n>` on stdout. Anything else propagates to main
/// for anyhow's rendering.
fn report_fatal(error: anyhow::Error) -> Result<()> {
  match error.downcast::<ListingError>() {
    Ok(ListingError::ToolError(stderr)) => {
      let mut out = std::io::stderr();
      let _ = out.write_all(&stderr);
      let _ = out.flush();
      process::exit(1);
    }
    Ok(status_error @ ListingError::ToolStatus(_)) => {
      println!("{status_error}");
      process::exit(1);
    }
    Err(other) => Err(other),
  }
}
