//! Dependency manifest resolution.
//!
//! Extracts project names from the `projects:` list of a west manifest. Each name
//! is a directory expected to exist in the workspace once dependencies are fetched.
//! Only the `name` field is looked at; all other project fields are ignored.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::fs::{Filesystem, FsError};
use crate::targets::Line;

/// Errors that can occur while loading the dependency manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("dependency manifest not found: {}", path.display())]
  ManifestNotFound { path: PathBuf },

  #[error("failed to read dependency manifest {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: FsError,
  },
}

impl ManifestError {
  /// Hint printed below the error message.
  pub fn remediation(&self) -> &'static str {
    match self {
      ManifestError::ManifestNotFound { .. } => "Add config/west.yml listing the projects this build depends on.",
      ManifestError::Read { .. } => "Check that the file is readable by the current user.",
    }
  }
}

/// One external project reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
  pub name: String,
}

#[derive(Debug, Clone, Copy)]
enum State {
  Outside,
  /// Inside `projects:`, which was declared at `indent`.
  Projects { indent: usize },
}

/// Resolve manifest text into project names, in first-seen order.
///
/// Duplicates are kept. The section ends at the first bare key (`key:` with no
/// value, not a list item) at or above the indentation of `projects:`, and is
/// never resumed.
pub fn resolve_manifest(manifest_text: &str) -> Vec<ManifestEntry> {
  let mut state = State::Outside;
  let mut entries = Vec::new();

  for raw in manifest_text.lines() {
    let line = Line::classify(raw);
    match (state, line) {
      (_, Line::Blank | Line::Comment) => {}
      (State::Outside, Line::TopLevelKey { key: "projects", value: "" }) => {
        state = State::Projects { indent: 0 };
      }
      (State::Outside, Line::Field {
        indent,
        key: "projects",
        value: "",
      }) => {
        state = State::Projects { indent };
      }
      (State::Outside, _) => {}
      (State::Projects { indent }, line) if line.is_bare_key() && line_indent(&line) <= indent => {
        debug!(line = %raw.trim(), "end of projects section");
        break;
      }
      (State::Projects { .. }, Line::ListItem { key: "name", value, .. } | Line::Field { key: "name", value, .. })
        if !value.is_empty() =>
      {
        entries.push(ManifestEntry { name: value.to_string() });
      }
      (State::Projects { .. }, _) => {}
    }
  }

  debug!(count = entries.len(), "resolved manifest projects");
  entries
}

fn line_indent(line: &Line<'_>) -> usize {
  match line {
    Line::ListItem { indent, .. } | Line::Field { indent, .. } => *indent,
    _ => 0,
  }
}

/// Read and resolve the manifest at `path` through `fs`.
///
/// # Errors
///
/// Returns `ManifestError::ManifestNotFound` if the file does not exist.
pub fn load_manifest(fs: &dyn Filesystem, path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
  if !fs.is_file(path) {
    return Err(ManifestError::ManifestNotFound { path: path.to_path_buf() });
  }
  let text = fs.read_to_string(path).map_err(|source| ManifestError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(resolve_manifest(&text))
}

/// Project names only.
pub fn project_names(entries: &[ManifestEntry]) -> Vec<&str> {
  entries.iter().map(|e| e.name.as_str()).collect()
}
