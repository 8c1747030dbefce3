//! Workspace preparation.
//!
//! Before any build the workspace must be writable, the container runtime usable,
//! and the west workspace initialized with every manifest project checked out.

use thiserror::Error;
use tracing::{info, warn};

use crate::consts::{CONFIG_DIR, WEST_DIR};
use crate::container::ContainerError;
use crate::context::Context;
use crate::manifest::{ManifestError, load_manifest};
use crate::runner::RunnerError;

#[derive(Debug, Error)]
pub enum WorkspaceError {
  #[error("precondition failed: {message}")]
  Precondition { message: String, remediation: String },

  #[error("`{step}` failed with exit code {code:?}")]
  StepFailed { step: String, code: Option<i32> },

  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Container(#[from] ContainerError),

  #[error(transparent)]
  Runner(#[from] RunnerError),
}

impl WorkspaceError {
  pub fn remediation(&self) -> Option<&str> {
    match self {
      WorkspaceError::Precondition { remediation, .. } => Some(remediation.as_str()),
      WorkspaceError::StepFailed { .. } => Some("Re-run with -v for details, or try `fwbuild clean_all` and `fwbuild init`."),
      WorkspaceError::Manifest(err) => Some(err.remediation()),
      WorkspaceError::Container(ContainerError::PullFailed { .. }) => {
        Some("Check network access and the FWBUILD_IMAGE reference.")
      }
      _ => None,
    }
  }
}

/// What `ensure_initialized` had to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceState {
  Ready,
  Initialized,
  Updated { missing: Vec<String> },
}

/// Workspace writable and container runtime usable.
pub fn check_preconditions(ctx: &Context<'_>) -> Result<(), WorkspaceError> {
  let workspace = &ctx.settings.workspace;
  if !ctx.fs.is_writable_dir(workspace) {
    return Err(WorkspaceError::Precondition {
      message: format!("workspace {} is not writable", workspace.display()),
      remediation: "Fix the directory's ownership or permissions, e.g. files left behind by a root container.".to_string(),
    });
  }

  let container = ctx.container();
  let available = match ctx.runner.run(&container.version_check()) {
    Ok(status) => status.success(),
    Err(err) => {
      warn!(error = %err, "container runtime check failed");
      false
    }
  };
  if !available {
    return Err(WorkspaceError::Precondition {
      message: format!("container runtime `{}` is not available", container.runtime),
      remediation: "Install and start docker or podman, or select one with FWBUILD_RUNTIME.".to_string(),
    });
  }

  Ok(())
}

fn run_west(ctx: &Context<'_>, args: &[&str]) -> Result<(), WorkspaceError> {
  let mut command = vec!["west"];
  command.extend_from_slice(args);
  let status = ctx.runner.run(&ctx.container().wrap(command.iter().copied()))?;
  if !status.success() {
    return Err(WorkspaceError::StepFailed {
      step: command.join(" "),
      code: status.code,
    });
  }
  Ok(())
}

/// Create the west workspace from the local config and fetch all projects.
pub fn init(ctx: &Context<'_>) -> Result<(), WorkspaceError> {
  info!(workspace = %ctx.settings.workspace.display(), "initializing west workspace");
  ctx.container().ensure_image(ctx.runner)?;
  run_west(ctx, &["init", "-l", CONFIG_DIR])?;
  run_west(ctx, &["update"])?;
  run_west(ctx, &["zephyr-export"])
}

/// Fetch or refresh every manifest project.
pub fn update(ctx: &Context<'_>) -> Result<(), WorkspaceError> {
  info!(workspace = %ctx.settings.workspace.display(), "updating west projects");
  ctx.container().ensure_image(ctx.runner)?;
  run_west(ctx, &["update"])
}

/// Manifest projects whose directories are absent.
pub fn missing_projects(ctx: &Context<'_>) -> Result<Vec<String>, WorkspaceError> {
  let entries = load_manifest(ctx.fs, &ctx.settings.manifest_path())?;
  Ok(
    entries
      .into_iter()
      .map(|e| e.name)
      .filter(|name| !ctx.fs.is_dir(&ctx.settings.workspace.join(name)))
      .collect(),
  )
}

/// Initialize when `.west` is absent, update when only some projects are missing.
pub fn ensure_initialized(ctx: &Context<'_>) -> Result<WorkspaceState, WorkspaceError> {
  if !ctx.fs.is_dir(&ctx.settings.workspace.join(WEST_DIR)) {
    info!("west workspace not initialized");
    init(ctx)?;
    return Ok(WorkspaceState::Initialized);
  }

  let missing = missing_projects(ctx)?;
  if missing.is_empty() {
    return Ok(WorkspaceState::Ready);
  }

  info!(missing = ?missing, "manifest projects missing, updating");
  update(ctx)?;
  Ok(WorkspaceState::Updated { missing })
}
