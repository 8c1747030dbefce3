//! Filesystem capability.
//!
//! Build and clean operations only touch the disk through [`Filesystem`], which
//! keeps them runnable against an in-memory fake in tests.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to {op} {}: {source}", path.display())]
pub struct FsError {
  pub op: &'static str,
  pub path: PathBuf,
  #[source]
  pub source: std::io::Error,
}

impl FsError {
  pub fn new(op: &'static str, path: &Path, source: std::io::Error) -> Self {
    Self {
      op,
      path: path.to_path_buf(),
      source,
    }
  }
}

pub trait Filesystem {
  fn exists(&self, path: &Path) -> bool;
  fn is_dir(&self, path: &Path) -> bool;
  fn is_file(&self, path: &Path) -> bool;
  /// True if `path` is a directory this process can create files in.
  fn is_writable_dir(&self, path: &Path) -> bool;
  fn read_to_string(&self, path: &Path) -> Result<String, FsError>;
  fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;
  fn copy(&self, from: &Path, to: &Path) -> Result<(), FsError>;
  fn remove_file(&self, path: &Path) -> Result<(), FsError>;
  fn remove_dir_all(&self, path: &Path) -> Result<(), FsError>;
  /// Replace `path` with `contents` via a temporary file in the same directory.
  fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), FsError>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl Filesystem for LocalFs {
  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_writable_dir(&self, path: &Path) -> bool {
    path.is_dir() && NamedTempFile::new_in(path).is_ok()
  }

  fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
    fs::read_to_string(path).map_err(|e| FsError::new("read", path, e))
  }

  fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
    fs::create_dir_all(path).map_err(|e| FsError::new("create directory", path, e))
  }

  fn copy(&self, from: &Path, to: &Path) -> Result<(), FsError> {
    fs::copy(from, to)
      .map(|_| ())
      .map_err(|e| FsError::new("copy to", to, e))
  }

  fn remove_file(&self, path: &Path) -> Result<(), FsError> {
    fs::remove_file(path).map_err(|e| FsError::new("remove file", path, e))
  }

  fn remove_dir_all(&self, path: &Path) -> Result<(), FsError> {
    fs::remove_dir_all(path).map_err(|e| FsError::new("remove directory", path, e))
  }

  fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), FsError> {
    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| FsError::new("create temporary file in", dir, e))?;
    temp
      .write_all(contents.as_bytes())
      .map_err(|e| FsError::new("write", temp.path(), e))?;
    temp
      .persist(path)
      .map_err(|e| FsError::new("replace", path, e.error))?;
    Ok(())
  }
}
