//! Implementation of the `fwbuild init` command.

use anyhow::{Context as _, Result};

use fwbuild_lib::context::Context;
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::runner::ProcessRunner;
use fwbuild_lib::settings::Settings;
use fwbuild_lib::workspace::{check_preconditions, init};

use crate::output::{print_info, print_stat, print_success};

/// Prepare the west workspace from `config/west.yml`.
///
/// Pulls the build image when it is missing, then runs `west init`,
/// `west update` and `west zephyr-export` inside the container.
pub fn cmd_init(settings: &Settings) -> Result<()> {
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);

  check_preconditions(&ctx)?;
  print_info(&format!("Initializing workspace {}", settings.workspace.display()));
  init(&ctx).context("Failed to initialize workspace")?;

  print_success("Workspace initialized");
  print_stat("Image", &settings.image);
  print_stat("Manifest", &settings.manifest_path().display().to_string());
  Ok(())
}
