//! Implementation of the `fwbuild clean` and `fwbuild clean_all` commands.

use std::io;

use anyhow::Result;

use fwbuild_lib::context::Context;
use fwbuild_lib::fleet::{CleanReport, clean, clean_all};
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::runner::ProcessRunner;
use fwbuild_lib::settings::Settings;

use crate::output::{print_info, print_item, print_success, symbols};
use crate::prompts::confirm_removal;

fn print_removed(report: &CleanReport) {
  if report.removed.is_empty() {
    print_info("Nothing to clean");
    return;
  }
  for path in &report.removed {
    print_item(symbols::REMOVE, path.display());
  }
  print_success(&format!("Removed {} path(s)", report.removed.len()));
}

pub fn cmd_clean(settings: &Settings, target: Option<&str>) -> Result<()> {
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);
  let report = clean(&ctx, target)?;
  print_removed(&report);
  Ok(())
}

/// Remove build output and every fetched dependency.
///
/// Asks before deleting anything unless `force` is set.
pub fn cmd_clean_all(settings: &Settings, force: bool) -> Result<()> {
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);

  let report = clean_all(&ctx, |paths| confirm_removal(paths, force).map_err(io::Error::other))?;

  if !report.confirmed {
    print_info("Aborted, nothing removed");
    return Ok(());
  }
  print_removed(&report);
  Ok(())
}
