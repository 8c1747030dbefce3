//! Container runtime wrapping.
//!
//! Every tool invocation (`west init`, `west update`, `west build`) runs inside the
//! build image with the workspace mounted at [`CONTAINER_WORKSPACE`].

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::consts::{APP_NAME, CONTAINER_TMP, CONTAINER_WORKSPACE};
use crate::runner::{CommandRunner, Invocation, RunnerError};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum ContainerError {
  #[error("container image {image} is not available and could not be pulled (exit code {code:?})")]
  PullFailed { image: String, code: Option<i32> },

  #[error(transparent)]
  Runner(#[from] RunnerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
  pub runtime: String,
  pub image: String,
  pub workspace: PathBuf,
  /// Host directory shared with every container as scratch space.
  pub tmp_dir: PathBuf,
}

impl Container {
  pub fn from_settings(settings: &Settings) -> Self {
    Self {
      runtime: settings.runtime.clone(),
      image: settings.image.clone(),
      workspace: settings.workspace.clone(),
      tmp_dir: std::env::temp_dir().join(APP_NAME),
    }
  }

  /// Invocation running `command` inside the build image.
  pub fn wrap<I, S>(&self, command: I) -> Invocation
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Invocation::new(&self.runtime)
      .current_dir(self.workspace.clone())
      .args(["run", "--rm"])
      .arg("-v")
      .arg(format!("{}:{}", self.workspace.display(), CONTAINER_WORKSPACE))
      .arg("-v")
      .arg(format!("{}:{}", self.tmp_dir.display(), CONTAINER_TMP))
      .args(["-w", CONTAINER_WORKSPACE])
      .arg(&self.image)
      .args(command)
  }

  /// `<runtime> --version`, used to check the runtime is usable.
  pub fn version_check(&self) -> Invocation {
    Invocation::new(&self.runtime).arg("--version").quiet()
  }

  /// Pull the image unless it is already present locally.
  pub fn ensure_image(&self, runner: &dyn CommandRunner) -> Result<(), ContainerError> {
    let inspect = Invocation::new(&self.runtime)
      .args(["image", "inspect"])
      .arg(&self.image)
      .quiet();
    if runner.run(&inspect)?.success() {
      return Ok(());
    }

    info!(image = %self.image, "image not found locally, pulling");
    let pull = Invocation::new(&self.runtime).arg("pull").arg(&self.image);
    let status = runner.run(&pull)?;
    if !status.success() {
      return Err(ContainerError::PullFailed {
        image: self.image.clone(),
        code: status.code,
      });
    }
    Ok(())
  }
}
