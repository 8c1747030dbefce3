use std::fs;

use fwbuild_lib::build::{BuildError, build_by_name};
use fwbuild_lib::context::Context;
use fwbuild_lib::fleet::{build_all, copy_artifacts};
use fwbuild_lib::fs::LocalFs;
use fwbuild_lib::targets::load_targets;

use super::common::{FakeRuntime, ready_workspace};

const CONFIG: &str = "include:\n  - board: nice_nano_v2\n    shield: corne_left\n    artifact-name: corne_left\n  - board: nice_nano_v2\n    shield: corne_right\n    artifact-name: corne_right\n  - board: nice_nano_v2\n    shield: settings_reset\n";

#[test]
fn build_by_name_produces_flat_artifact() {
  let (temp, settings) = ready_workspace(CONFIG);
  let runtime = FakeRuntime::new(temp.path());
  let targets = load_targets(&LocalFs, &settings.build_config).unwrap();

  let report = build_by_name(&Context::new(&settings, &LocalFs, &runtime), &targets, "corne_right").unwrap();

  assert_eq!(report.artifact, temp.path().join("build/corne_right.uf2"));
  assert!(report.artifact.is_file());
  assert_eq!(runtime.build_dirs(), vec!["build/corne_right"]);
}

#[test]
fn missing_target_leaves_no_build_directory() {
  let (temp, settings) = ready_workspace(CONFIG);
  let runtime = FakeRuntime::new(temp.path());
  let targets = load_targets(&LocalFs, &settings.build_config).unwrap();

  let err = build_by_name(&Context::new(&settings, &LocalFs, &runtime), &targets, "missing").unwrap_err();

  let BuildError::TargetNotFound { available, .. } = err else {
    panic!("expected TargetNotFound");
  };
  assert_eq!(available, vec!["corne_left", "corne_right", "build_1"]);
  assert!(!temp.path().join("build").exists());
  assert!(runtime.build_dirs().is_empty());
}

#[test]
fn silent_failure_is_detected() {
  let (temp, settings) = ready_workspace(CONFIG);
  let mut runtime = FakeRuntime::new(temp.path());
  runtime.no_output.push("corne_left");
  let targets = load_targets(&LocalFs, &settings.build_config).unwrap();

  let err = build_by_name(&Context::new(&settings, &LocalFs, &runtime), &targets, "corne_left").unwrap_err();

  assert!(matches!(err, BuildError::ArtifactMissing { .. }));
  assert!(err.elapsed().is_some());
}

#[test]
fn build_all_counts_failures_and_keeps_going() {
  let (temp, settings) = ready_workspace(CONFIG);
  let mut runtime = FakeRuntime::new(temp.path());
  runtime.failing.push("corne_left");
  let targets = load_targets(&LocalFs, &settings.build_config).unwrap();

  let summary = build_all(&Context::new(&settings, &LocalFs, &runtime), &targets, |_, _| {}).unwrap();

  assert_eq!(summary.failed.len(), 1);
  assert_eq!(summary.succeeded.len(), 2);
  assert_eq!(
    runtime.build_dirs(),
    vec!["build/corne_left", "build/corne_right", "build/build_1"]
  );
}

#[test]
fn copy_reports_two_copied_one_skipped() {
  let (temp, settings) = ready_workspace(CONFIG);
  let targets = load_targets(&LocalFs, &settings.build_config).unwrap();
  for name in ["corne_left", "build_1"] {
    let dir = temp.path().join("build").join(name).join("zephyr");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("zmk.uf2"), name).unwrap();
  }
  let runtime = FakeRuntime::new(temp.path());
  let dest = temp.path().join("firmware");

  let report = copy_artifacts(&Context::new(&settings, &LocalFs, &runtime), &targets, &dest).unwrap();

  assert_eq!(report.copied.len(), 2);
  assert_eq!(report.skipped, vec!["corne_right"]);
  assert_eq!(fs::read_to_string(dest.join("build_1.uf2")).unwrap(), "build_1");
}
