//! Test doubles for fwbuild-lib.
//!
//! [`RecordingRunner`] stands in for the container runtime and [`MemoryFs`] for
//! the disk, so build and clean logic can be exercised without either.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::{Filesystem, FsError};
use crate::runner::{CommandRunner, Invocation, RunStatus, RunnerError};

type Responder = Box<dyn Fn(&Invocation) -> RunStatus>;

/// Records every invocation and answers with a scripted status.
pub struct RecordingRunner {
  calls: RefCell<Vec<Invocation>>,
  respond: Responder,
}

impl RecordingRunner {
  pub fn succeeding() -> Self {
    Self::responding(|_| RunStatus::SUCCESS)
  }

  pub fn responding(respond: impl Fn(&Invocation) -> RunStatus + 'static) -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      respond: Box::new(respond),
    }
  }

  /// Answer with `statuses` in order, then succeed.
  pub fn with_statuses(statuses: impl IntoIterator<Item = RunStatus>) -> Self {
    let queue = RefCell::new(statuses.into_iter().collect::<VecDeque<_>>());
    Self::responding(move |_| queue.borrow_mut().pop_front().unwrap_or(RunStatus::SUCCESS))
  }

  pub fn calls(&self) -> Vec<Invocation> {
    self.calls.borrow().clone()
  }

  pub fn commands(&self) -> Vec<String> {
    self.calls.borrow().iter().map(ToString::to_string).collect()
  }
}

impl CommandRunner for RecordingRunner {
  fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError> {
    self.calls.borrow_mut().push(invocation.clone());
    Ok((self.respond)(invocation))
  }
}

/// In-memory filesystem.
#[derive(Debug, Default)]
pub struct MemoryFs {
  dirs: RefCell<BTreeSet<PathBuf>>,
  files: RefCell<BTreeMap<PathBuf, String>>,
  read_only: bool,
}

impl MemoryFs {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn read_only() -> Self {
    Self {
      read_only: true,
      ..Self::default()
    }
  }

  pub fn add_dir(&self, path: impl AsRef<Path>) {
    let mut dirs = self.dirs.borrow_mut();
    for ancestor in path.as_ref().ancestors() {
      if !ancestor.as_os_str().is_empty() {
        dirs.insert(ancestor.to_path_buf());
      }
    }
  }

  pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      self.add_dir(parent);
    }
    self.files.borrow_mut().insert(path.to_path_buf(), contents.to_string());
  }

  pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
    self.files.borrow().get(path.as_ref()).cloned()
  }

  fn not_found(op: &'static str, path: &Path) -> FsError {
    FsError::new(op, path, io::Error::from(io::ErrorKind::NotFound))
  }
}

impl Filesystem for MemoryFs {
  fn exists(&self, path: &Path) -> bool {
    self.is_dir(path) || self.is_file(path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.dirs.borrow().contains(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    self.files.borrow().contains_key(path)
  }

  fn is_writable_dir(&self, path: &Path) -> bool {
    !self.read_only && self.is_dir(path)
  }

  fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
    self.read(path).ok_or_else(|| Self::not_found("read", path))
  }

  fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
    self.add_dir(path);
    Ok(())
  }

  fn copy(&self, from: &Path, to: &Path) -> Result<(), FsError> {
    let contents = self.read(from).ok_or_else(|| Self::not_found("copy from", from))?;
    self.add_file(to, &contents);
    Ok(())
  }

  fn remove_file(&self, path: &Path) -> Result<(), FsError> {
    self
      .files
      .borrow_mut()
      .remove(path)
      .map(|_| ())
      .ok_or_else(|| Self::not_found("remove file", path))
  }

  fn remove_dir_all(&self, path: &Path) -> Result<(), FsError> {
    if !self.is_dir(path) {
      return Err(Self::not_found("remove directory", path));
    }
    self.dirs.borrow_mut().retain(|d| !d.starts_with(path));
    self.files.borrow_mut().retain(|f, _| !f.starts_with(path));
    Ok(())
  }

  fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), FsError> {
    self.add_file(path, contents);
    Ok(())
  }
}
