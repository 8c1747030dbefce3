//! Build execution.

use std::time::Instant;

use tracing::{info, warn};

use crate::build::command::west_build_args;
use crate::build::types::{BuildError, BuildReport};
use crate::context::Context;
use crate::targets::{BuildTarget, find_target};
use crate::workspace::{WorkspaceError, WorkspaceState, check_preconditions, ensure_initialized};

/// Get the workspace and image ready for the first build.
pub fn prepare(ctx: &Context<'_>) -> Result<WorkspaceState, BuildError> {
  check_preconditions(ctx)?;
  let state = ensure_initialized(ctx)?;
  let container = ctx.container();
  container.ensure_image(ctx.runner).map_err(WorkspaceError::from)?;
  ctx.fs.create_dir_all(&container.tmp_dir)?;
  Ok(state)
}

/// Prepare the workspace, then build the first target named `name`.
///
/// # Errors
///
/// `BuildError::TargetNotFound` if no target has that artifact name; nothing is
/// created on disk in that case.
pub fn build_by_name(ctx: &Context<'_>, targets: &[BuildTarget], name: &str) -> Result<BuildReport, BuildError> {
  prepare(ctx)?;

  let Some(target) = find_target(targets, name) else {
    return Err(BuildError::TargetNotFound {
      name: name.to_string(),
      available: targets.iter().map(|t| t.artifact_name.clone()).collect(),
    });
  };

  build_target(ctx, target)
}

/// Build one target in a prepared workspace.
///
/// A zero exit status is not trusted on its own: the firmware image must exist
/// afterwards or the build counts as failed.
pub fn build_target(ctx: &Context<'_>, target: &BuildTarget) -> Result<BuildReport, BuildError> {
  let settings = ctx.settings;
  let name = &target.artifact_name;
  let start = Instant::now();

  info!(
    target = %name,
    board = %target.board,
    shield = target.shield.as_deref().unwrap_or(""),
    incremental = settings.incremental,
    "building target"
  );

  ctx.fs.create_dir_all(&settings.build_root())?;

  let invocation = ctx.container().wrap(west_build_args(target, settings.incremental));
  let status = ctx.runner.run(&invocation)?;
  if !status.success() {
    return Err(BuildError::InvocationFailure {
      name: name.clone(),
      code: status.code,
      elapsed: start.elapsed(),
    });
  }

  let produced = settings.artifact_path(name);
  if !ctx.fs.is_file(&produced) {
    warn!(target = %name, path = %produced.display(), "build succeeded without producing firmware");
    return Err(BuildError::ArtifactMissing {
      name: name.clone(),
      path: produced,
      elapsed: start.elapsed(),
    });
  }

  let flat = settings.flat_artifact_path(name);
  ctx.fs.copy(&produced, &flat)?;

  let elapsed = start.elapsed();
  info!(target = %name, artifact = %flat.display(), elapsed = ?elapsed, "build complete");

  Ok(BuildReport {
    artifact_name: name.clone(),
    artifact: flat,
    elapsed,
  })
}
