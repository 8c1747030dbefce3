//! Build target resolution.
//!
//! Reads the `include:` list of a build configuration and produces the ordered
//! sequence of [`BuildTarget`]s that every other command works from.
//!
//! The format is the small subset of YAML used by firmware build matrices:
//!
//! ```yaml
//! include:
//!   - board: nice_nano_v2
//!     shield: corne_left
//!     artifact-name: corne_left
//!   - board: nice_nano_v2
//!     shield: settings_reset
//! ```
//!
//! A new record starts at every indented `- board:` line. The record being accumulated is
//! flushed when the next one starts and once more at end of input. Records that
//! do not name their artifact get `build_<n>`, numbered in flush order.

mod line;

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub use line::Line;

use crate::fs::{Filesystem, FsError};

/// Errors that can occur while loading the build configuration.
#[derive(Debug, Error)]
pub enum TargetsError {
  #[error("build configuration not found: {}", path.display())]
  ConfigNotFound { path: PathBuf },

  #[error("failed to read build configuration {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: FsError,
  },
}

impl TargetsError {
  /// Hint printed below the error message.
  pub fn remediation(&self) -> &'static str {
    match self {
      TargetsError::ConfigNotFound { .. } => {
        "Create a build.yaml with an `include:` list, or point FWBUILD_CONFIG at an existing one."
      }
      TargetsError::Read { .. } => "Check that the file is readable by the current user.",
    }
  }
}

/// One firmware build unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
  pub board: String,
  pub shield: Option<String>,
  pub snippet: Option<String>,
  pub extra_args: Option<String>,
  pub artifact_name: String,
}

impl BuildTarget {
  /// Extra build-tool arguments split on whitespace.
  pub fn extra_args_tokens(&self) -> Vec<&str> {
    self
      .extra_args
      .as_deref()
      .map(|args| args.split_whitespace().collect())
      .unwrap_or_default()
  }
}

/// Fields collected for the record currently being read.
#[derive(Debug, Default)]
struct Draft {
  board: String,
  shield: String,
  snippet: String,
  extra_args: String,
  artifact_name: String,
}

impl Draft {
  fn new(board: &str) -> Self {
    Self {
      board: board.to_string(),
      ..Self::default()
    }
  }

  fn set(&mut self, key: &str, value: &str) -> bool {
    let slot = match key {
      "shield" => &mut self.shield,
      "snippet" => &mut self.snippet,
      "cmake-args" => &mut self.extra_args,
      "artifact-name" => &mut self.artifact_name,
      _ => return false,
    };
    *slot = value.to_string();
    true
  }
}

fn non_empty(value: String) -> Option<String> {
  if value.is_empty() { None } else { Some(value) }
}

#[derive(Debug)]
enum State {
  Outside,
  Include { current: Option<Draft> },
}

/// Line-driven resolver state machine.
///
/// `flush` is the only place a record is emitted and the only place a
/// fallback name is generated.
#[derive(Debug)]
struct Resolver {
  state: State,
  generated: usize,
  targets: Vec<BuildTarget>,
}

impl Resolver {
  fn new() -> Self {
    Self {
      state: State::Outside,
      generated: 0,
      targets: Vec::new(),
    }
  }

  fn feed(&mut self, line: Line<'_>) {
    match (&mut self.state, line) {
      (_, Line::Blank | Line::Comment) => {}
      (State::Outside, Line::TopLevelKey { key: "include", .. }) => {
        self.state = State::Include { current: None };
      }
      (State::Outside, _) => {}
      (State::Include { current }, Line::ListItem {
        indent,
        key: "board",
        value,
      }) if indent > 0 && !value.is_empty() => {
        let previous = current.replace(Draft::new(value));
        self.flush(previous);
      }
      (State::Include { current: Some(draft) }, Line::Field { key, value, .. }) if !value.is_empty() => {
        if !draft.set(key, value) {
          debug!(key = %key, "ignoring unknown target field");
        }
      }
      (State::Include { .. }, _) => {}
    }
  }

  fn finish(mut self) -> Vec<BuildTarget> {
    if let State::Include { current } = &mut self.state {
      let last = current.take();
      self.flush(last);
    }
    self.targets
  }

  fn flush(&mut self, draft: Option<Draft>) {
    let Some(draft) = draft else {
      return;
    };

    let artifact_name = if draft.artifact_name.is_empty() {
      self.generated += 1;
      let name = format!("build_{}", self.generated);
      warn!(
        board = %draft.board,
        shield = %draft.shield,
        artifact = %name,
        "no artifact-name set, using generated name"
      );
      name
    } else {
      draft.artifact_name
    };

    self.targets.push(BuildTarget {
      board: draft.board,
      shield: non_empty(draft.shield),
      snippet: non_empty(draft.snippet),
      extra_args: non_empty(draft.extra_args),
      artifact_name,
    });
  }
}

/// Resolve build configuration text into ordered targets.
///
/// Never fails: lines that do not fit the expected shapes are skipped.
pub fn resolve(config_text: &str) -> Vec<BuildTarget> {
  let mut resolver = Resolver::new();
  for raw in config_text.lines() {
    resolver.feed(Line::classify(raw));
  }
  let targets = resolver.finish();
  debug!(count = targets.len(), "resolved build targets");
  targets
}

/// Read and resolve the build configuration at `path` through `fs`.
///
/// # Errors
///
/// Returns `TargetsError::ConfigNotFound` if the file does not exist.
pub fn load_targets(fs: &dyn Filesystem, path: &Path) -> Result<Vec<BuildTarget>, TargetsError> {
  if !fs.is_file(path) {
    return Err(TargetsError::ConfigNotFound { path: path.to_path_buf() });
  }
  let text = fs.read_to_string(path).map_err(|source| TargetsError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(resolve(&text))
}

/// First target whose artifact name is `name`.
pub fn find_target<'a>(targets: &'a [BuildTarget], name: &str) -> Option<&'a BuildTarget> {
  targets.iter().find(|t| t.artifact_name == name)
}
