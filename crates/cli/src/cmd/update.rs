use anyhow::{Context as _, Result};

use fwbuild_lib::context::Context;
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::runner::ProcessRunner;
use fwbuild_lib::settings::Settings;
use fwbuild_lib::workspace::{check_preconditions, update};

use crate::output::{print_info, print_success};

pub fn cmd_update(settings: &Settings) -> Result<()> {
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);

  check_preconditions(&ctx)?;
  print_info("Updating manifest projects");
  update(&ctx).context("Failed to update workspace")?;

  print_success("Workspace up to date");
  Ok(())
}
