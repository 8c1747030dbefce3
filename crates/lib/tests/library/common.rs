//! Shared helpers for library integration tests.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use fwbuild_lib::runner::{CommandRunner, Invocation, RunStatus, RunnerError};
use fwbuild_lib::settings::Settings;
use tempfile::TempDir;

/// Stands in for the container runtime.
///
/// `west build` invocations write a firmware file into the requested build
/// directory unless that directory is listed in `no_output` or `failing`.
pub struct FakeRuntime<'a> {
  pub workspace: &'a Path,
  pub failing: Vec<&'static str>,
  pub no_output: Vec<&'static str>,
  pub calls: RefCell<Vec<Invocation>>,
}

impl<'a> FakeRuntime<'a> {
  pub fn new(workspace: &'a Path) -> Self {
    Self {
      workspace,
      failing: Vec::new(),
      no_output: Vec::new(),
      calls: RefCell::new(Vec::new()),
    }
  }

  pub fn build_dirs(&self) -> Vec<String> {
    self
      .calls
      .borrow()
      .iter()
      .filter_map(|inv| build_dir(inv).map(str::to_string))
      .collect()
  }
}

fn build_dir(inv: &Invocation) -> Option<&str> {
  let index = inv.args.iter().position(|a| a == "-d")?;
  inv.args.get(index + 1).map(String::as_str)
}

impl CommandRunner for FakeRuntime<'_> {
  fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError> {
    self.calls.borrow_mut().push(invocation.clone());
    let Some(dir) = build_dir(invocation) else {
      return Ok(RunStatus::SUCCESS);
    };
    if self.failing.iter().any(|f| dir.ends_with(f)) {
      return Ok(RunStatus::failed(1));
    }
    if !self.no_output.iter().any(|f| dir.ends_with(f)) {
      let out = self.workspace.join(dir).join("zephyr");
      fs::create_dir_all(&out).unwrap();
      fs::write(out.join("zmk.uf2"), dir).unwrap();
    }
    Ok(RunStatus::SUCCESS)
  }
}

/// Initialized workspace with a manifest whose projects are all checked out.
pub fn ready_workspace(build_config: &str) -> (TempDir, Settings) {
  let temp = TempDir::new().unwrap();
  let root = temp.path();
  fs::create_dir_all(root.join(".west")).unwrap();
  fs::create_dir_all(root.join("config")).unwrap();
  fs::create_dir_all(root.join("zmk")).unwrap();
  fs::write(root.join("config/west.yml"), "projects:\n  - name: zmk\n").unwrap();
  fs::write(root.join("build.yaml"), build_config).unwrap();
  let settings = Settings::for_workspace(root, "corne");
  (temp, settings)
}
