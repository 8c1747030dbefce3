//! Implementation of the build commands.
//!
//! `build <name>` and the preset shortcuts build a single target. `build`
//! without a name builds every target and keeps going past failures.

use anyhow::{Result, bail};
use owo_colors::{OwoColorize, Stream};

use fwbuild_lib::build::{BuildError, BuildReport, build_by_name};
use fwbuild_lib::context::Context;
use fwbuild_lib::fleet::build_all;
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::preset::Preset;
use fwbuild_lib::runner::ProcessRunner;
use fwbuild_lib::settings::Settings;
use fwbuild_lib::targets::{BuildTarget, load_targets};

use super::list::print_targets;
use crate::output::{format_duration, print_error, print_info, print_stat, print_success, symbols};

pub fn cmd_build_preset(settings: &Settings, preset: Preset) -> Result<()> {
  cmd_build(settings, Some(&preset.artifact_name(&settings.keyboard)))
}

pub fn cmd_build(settings: &Settings, name: Option<&str>) -> Result<()> {
  let targets = load_targets(&LocalFs, &settings.build_config)?;
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);

  match name {
    Some(name) => build_one(&ctx, &targets, name),
    None => build_every(&ctx, &targets),
  }
}

fn build_one(ctx: &Context<'_>, targets: &[BuildTarget], name: &str) -> Result<()> {
  print_info(&format!("Building {}", name));
  let report = match build_by_name(ctx, targets, name) {
    Ok(report) => report,
    Err(err @ BuildError::TargetNotFound { .. }) => {
      if !targets.is_empty() {
        println!("Configured targets:");
        print_targets(targets);
      }
      return Err(err.into());
    }
    Err(err) => return Err(err.into()),
  };

  print_success(&format!(
    "Built {} in {}",
    report.artifact_name,
    format_duration(report.elapsed)
  ));
  print_stat("Firmware", &report.artifact.display().to_string());
  Ok(())
}

fn print_result(target: &BuildTarget, result: &Result<BuildReport, BuildError>) {
  match result {
    Ok(report) => println!(
      "  {} {} ({})",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      target.artifact_name,
      format_duration(report.elapsed)
    ),
    Err(err) => println!(
      "  {} {}: {}",
      symbols::ERROR.if_supports_color(Stream::Stdout, |s| s.red()),
      target.artifact_name,
      err
    ),
  }
}

fn build_every(ctx: &Context<'_>, targets: &[BuildTarget]) -> Result<()> {
  print_info(&format!("Building {} target(s)", targets.len()));
  let summary = build_all(ctx, targets, |target, result| print_result(target, result))?;

  println!();
  print_stat("Succeeded", &summary.succeeded.len().to_string());
  print_stat("Failed", &summary.failed.len().to_string());
  print_stat("Duration", &format_duration(summary.elapsed));

  if summary.is_success() {
    print_success("All builds succeeded");
    return Ok(());
  }

  for (name, err) in &summary.failed {
    print_error(&format!("{}: {}", name, err));
  }
  bail!("{} of {} build(s) failed", summary.failed.len(), summary.total())
}
