//! Whole-configuration operations.
//!
//! Everything here iterates the resolved target list or the manifest project
//! list: building every target, listing, cleaning, `.gitignore` generation and
//! collecting firmware images into one directory.

mod batch;
mod clean;
mod copy;
mod gitignore;
mod list;

use thiserror::Error;

use crate::build::BuildError;
use crate::fs::FsError;
use crate::manifest::ManifestError;

pub use batch::{BuildSummary, build_all};
pub use clean::{CleanReport, clean, clean_all, clean_all_paths};
pub use copy::{CopyReport, copy_artifacts};
pub use gitignore::{gitignore_contents, write_gitignore};
pub use list::describe_target;

#[derive(Debug, Error)]
pub enum FleetError {
  #[error(transparent)]
  Build(#[from] BuildError),

  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Fs(#[from] FsError),

  #[error("confirmation failed: {0}")]
  Prompt(#[source] std::io::Error),

  #[error("`{name}` is not a target name")]
  InvalidTarget { name: String },
}

impl FleetError {
  pub fn remediation(&self) -> Option<String> {
    match self {
      FleetError::Build(err) => err.remediation(),
      FleetError::Manifest(err) => Some(err.remediation().to_string()),
      FleetError::InvalidTarget { .. } => Some("Pass an artifact name as shown by `fwbuild list`.".to_string()),
      FleetError::Fs(_) | FleetError::Prompt(_) => None,
    }
  }
}
