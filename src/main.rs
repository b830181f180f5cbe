//! # headercheck
//!
//! A tool that verifies tracked source files begin with the expected
//! copyright license header.

use anyhow::Result;
use headercheck::cli::{Cli, run_scan};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_scan(cli.scan_args)
}
