//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stand-in for docker.
///
/// Every call succeeds. A `west build` writes `zephyr/zmk.uf2` into its `-d`
/// directory, except for directories ending in `_fail` (exit 2) or `_silent`
/// (exit 0, no firmware).
const FAKE_RUNTIME: &str = r#"#!/bin/sh
ws=""
dir=""
prev=""
for arg in "$@"; do
  case "$prev" in
    -v) case "$arg" in *:/workspace) ws="${arg%:/workspace}" ;; esac ;;
    -d) dir="$arg" ;;
  esac
  prev="$arg"
done
echo "$*" >> "$FAKE_RUNTIME_LOG"
[ -z "$dir" ] && exit 0
case "$dir" in
  *_fail) exit 2 ;;
  *_silent) exit 0 ;;
esac
mkdir -p "$ws/$dir/zephyr" && printf firmware > "$ws/$dir/zephyr/zmk.uf2"
"#;

/// Isolated workspace with a scripted container runtime.
pub struct TestEnv {
  pub temp: TempDir,
  runtime: PathBuf,
}

impl TestEnv {
  /// Workspace containing `build.yaml` and an initialized `.west`.
  pub fn new(config: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let runtime = temp.path().join("fake-docker");
    std::fs::write(&runtime, FAKE_RUNTIME).unwrap();
    make_executable(&runtime);

    let env = Self { temp, runtime };
    env.write_file("workspace/build.yaml", config);
    env.write_file("workspace/config/west.yml", "manifest:\n  projects:\n");
    std::fs::create_dir_all(env.workspace().join(".west")).unwrap();
    env
  }

  pub fn workspace(&self) -> PathBuf {
    self.temp.path().join("workspace")
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Every runtime invocation so far, one per line.
  pub fn runtime_log(&self) -> String {
    std::fs::read_to_string(self.temp.path().join("runtime.log")).unwrap_or_default()
  }

  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("fwbuild");
    cmd
      .env("FWBUILD_WORKSPACE", self.workspace())
      .env("FWBUILD_KEYBOARD", "corne")
      .env("FWBUILD_RUNTIME", &self.runtime)
      .env("FAKE_RUNTIME_LOG", self.temp.path().join("runtime.log"))
      .env_remove("FWBUILD_CONFIG")
      .env_remove("FWBUILD_INCREMENTAL")
      .env_remove("RUST_LOG");
    cmd
  }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
  use std::os::unix::fs::PermissionsExt;
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
