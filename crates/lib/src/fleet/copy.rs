use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::context::Context;
use crate::fleet::FleetError;
use crate::settings::artifact_file_name;
use crate::targets::BuildTarget;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
  pub copied: Vec<PathBuf>,
  /// Targets with no firmware in their build directory.
  pub skipped: Vec<String>,
}

/// Copy each target's firmware into `dest` as `<artifact-name>.uf2`.
///
/// Targets that have not been built are skipped with a warning.
pub fn copy_artifacts(ctx: &Context<'_>, targets: &[BuildTarget], dest: &Path) -> Result<CopyReport, FleetError> {
  let mut report = CopyReport::default();

  for target in targets {
    let name = &target.artifact_name;
    let source = ctx.settings.artifact_path(name);
    if !ctx.fs.is_file(&source) {
      warn!(target = %name, path = %source.display(), "no firmware found, skipping");
      report.skipped.push(name.clone());
      continue;
    }

    if report.copied.is_empty() {
      ctx.fs.create_dir_all(dest)?;
    }
    let destination = dest.join(artifact_file_name(name));
    ctx.fs.copy(&source, &destination)?;
    info!(target = %name, path = %destination.display(), "copied firmware");
    report.copied.push(destination);
  }

  Ok(report)
}
