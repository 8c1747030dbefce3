//! Implementation of the `fwbuild list` command.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use fwbuild_lib::fleet::describe_target;
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::settings::Settings;
use fwbuild_lib::targets::{BuildTarget, load_targets};

use crate::output::{OutputFormat, print_json, print_warning};

pub fn cmd_list(settings: &Settings, output: OutputFormat) -> Result<()> {
  let targets = load_targets(&LocalFs, &settings.build_config)?;

  if output.is_json() {
    return print_json(&targets);
  }

  if targets.is_empty() {
    print_warning(&format!(
      "No build targets in {}",
      settings.build_config.display()
    ));
    return Ok(());
  }

  print_targets(&targets);
  Ok(())
}

/// One aligned line per target: artifact name, then board and options.
pub(super) fn print_targets(targets: &[BuildTarget]) {
  let width = targets.iter().map(|t| t.artifact_name.len()).max().unwrap_or(0);
  for target in targets {
    let name = format!("{:<width$}", target.artifact_name, width = width);
    println!(
      "{}  {}",
      name.if_supports_color(Stream::Stdout, |s| s.bold()),
      describe_target(target)
    );
  }
}
