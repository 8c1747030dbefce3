use anyhow::Result;

use fwbuild_lib::context::Context;
use fwbuild_lib::fleet::write_gitignore;
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::runner::ProcessRunner;
use fwbuild_lib::settings::Settings;

use crate::output::print_success;

pub fn cmd_gitignore(settings: &Settings) -> Result<()> {
  let ctx = Context::new(settings, &LocalFs, &ProcessRunner);
  let path = write_gitignore(&ctx)?;
  print_success(&format!("Wrote {}", path.display()));
  Ok(())
}
