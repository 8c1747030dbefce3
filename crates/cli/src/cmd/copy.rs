//! Implementation of the `fwbuild copy` command.

use std::path::PathBuf;

use anyhow::Result;

use fwbuild_lib::context::Context;
use fwbuild_lib::fleet::copy_artifacts;
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::runner::ProcessRunner;
use fwbuild_lib::settings::Settings;
use fwbuild_lib::targets::load_targets;

use crate::output::{print_item, print_stat, print_success, print_warning, symbols};

/// Collect every built firmware image into `dest`.
///
/// Targets that were never built are skipped with a warning rather than
/// failing the command.
pub fn cmd_copy(settings: &Settings, dest: Option<PathBuf>) -> Result<()> {
  let targets = load_targets(&LocalFs, &settings.build_config)?;
  let dest = dest.unwrap_or_else(|| settings.default_copy_dest());
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);

  let report = copy_artifacts(&ctx, &targets, &dest)?;

  for path in &report.copied {
    print_item(symbols::ARROW, path.display());
  }
  for name in &report.skipped {
    print_warning(&format!("No firmware for {}, build it first", name));
  }

  print_success(&format!("Copied firmware to {}", dest.display()));
  print_stat("Copied", &report.copied.len().to_string());
  print_stat("Skipped", &report.skipped.len().to_string());
  Ok(())
}
