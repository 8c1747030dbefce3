//! Types for build execution.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::fs::FsError;
use crate::runner::RunnerError;
use crate::workspace::WorkspaceError;

/// Result of one successful target build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
  pub artifact_name: String,
  /// Flat copy of the firmware, named after the target.
  pub artifact: PathBuf,
  pub elapsed: Duration,
}

/// Errors that can occur while building a target.
#[derive(Debug, Error)]
pub enum BuildError {
  /// No target carries the requested artifact name.
  #[error("no build target named '{name}'")]
  TargetNotFound { name: String, available: Vec<String> },

  /// The build tool exited unsuccessfully.
  #[error("build of '{name}' failed with exit code {code:?} after {elapsed:.1?}")]
  InvocationFailure {
    name: String,
    code: Option<i32>,
    elapsed: Duration,
  },

  /// The build tool reported success but left no firmware behind.
  #[error("build of '{name}' reported success but {} is missing ({elapsed:.1?})", path.display())]
  ArtifactMissing {
    name: String,
    path: PathBuf,
    elapsed: Duration,
  },

  /// Preconditions, initialization or image checks failed.
  #[error(transparent)]
  Workspace(#[from] WorkspaceError),

  #[error(transparent)]
  Runner(#[from] RunnerError),

  #[error(transparent)]
  Fs(#[from] FsError),
}

impl BuildError {
  /// Errors that must stop a batch instead of counting as one failed target.
  pub fn is_fatal(&self) -> bool {
    matches!(self, BuildError::Workspace(_) | BuildError::Runner(_))
  }

  /// Wall-clock time spent on the failed build, when one was attempted.
  pub fn elapsed(&self) -> Option<Duration> {
    match self {
      BuildError::InvocationFailure { elapsed, .. } | BuildError::ArtifactMissing { elapsed, .. } => Some(*elapsed),
      _ => None,
    }
  }

  pub fn remediation(&self) -> Option<String> {
    match self {
      BuildError::TargetNotFound { available, .. } if available.is_empty() => {
        Some("The build configuration defines no targets.".to_string())
      }
      BuildError::TargetNotFound { .. } => Some("Pick one of the configured targets listed above.".to_string()),
      BuildError::InvocationFailure { .. } => Some(
        "Check the board and shield names in the build configuration, re-run with -v for details, \
         or drop --incremental to force a pristine build."
          .to_string(),
      ),
      BuildError::ArtifactMissing { .. } => Some(
        "The build tool exited cleanly without producing firmware; run a pristine build and inspect its output."
          .to_string(),
      ),
      BuildError::Workspace(err) => err.remediation().map(ToString::to_string),
      BuildError::Runner(_) | BuildError::Fs(_) => None,
    }
  }
}
