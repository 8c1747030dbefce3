//! Build commands against the scripted runtime.

use predicates::prelude::*;
use serial_test::serial;

use crate::common::TestEnv;

const CONFIG: &str = "\
include:
  - board: nice_nano_v2
    shield: corne_left
    artifact-name: corne_left
  - board: nice_nano_v2
    shield: corne_right
    artifact-name: corne_right
  - board: nice_nano_v2
    shield: settings_reset
    artifact-name: settings_reset
";

#[test]
#[serial]
fn build_by_name_writes_flat_firmware() {
  let env = TestEnv::new(CONFIG);

  env
    .cmd()
    .args(["build", "corne_right"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Built corne_right"));

  let ws = env.workspace();
  assert!(ws.join("build/corne_right/zephyr/zmk.uf2").is_file());
  assert_eq!(std::fs::read_to_string(ws.join("build/corne_right.uf2")).unwrap(), "firmware");
  assert!(!ws.join("build/corne_left").exists());

  let log = env.runtime_log();
  assert!(log.contains("west build -s zmk/app -d build/corne_right -b nice_nano_v2 -p -- -DZMK_CONFIG=/workspace/config -DSHIELD=corne_right"));
}

#[test]
#[serial]
fn incremental_flag_drops_pristine() {
  let env = TestEnv::new(CONFIG);

  env.cmd().args(["-i", "build", "corne_left"]).assert().success();

  let log = env.runtime_log();
  assert!(log.contains("-d build/corne_left -b nice_nano_v2 --"));
  assert!(!log.contains(" -p "));
}

#[test]
#[serial]
fn preset_builds_keyboard_target() {
  let env = TestEnv::new(CONFIG);

  env.cmd().arg("build_left").assert().success();
  env.cmd().arg("build_reset").assert().success();

  let ws = env.workspace();
  assert!(ws.join("build/corne_left.uf2").is_file());
  assert!(ws.join("build/settings_reset.uf2").is_file());
}

#[test]
#[serial]
fn unknown_target_lists_available_names() {
  let env = TestEnv::new(CONFIG);

  env
    .cmd()
    .args(["build", "missing"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("no build target named 'missing'"))
    .stdout(predicate::str::contains("Configured targets"))
    .stdout(predicate::str::contains("shield=corne_right"))
    .stdout(predicate::str::contains("settings_reset"))
    .stderr(predicate::str::contains("corne_left").not());

  assert!(!env.workspace().join("build/missing").exists());
}

#[test]
#[serial]
fn preset_without_matching_target_fails() {
  let env = TestEnv::new(CONFIG);

  env
    .cmd()
    .arg("build_dongle")
    .assert()
    .failure()
    .stderr(predicate::str::contains("corne_dongle"));
}

#[test]
#[serial]
fn silent_failure_is_reported() {
  let env = TestEnv::new("include:\n  - board: xiao_ble\n    artifact-name: corne_silent\n");

  env
    .cmd()
    .args(["build", "corne_silent"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("reported success but"));

  assert!(!env.workspace().join("build/corne_silent.uf2").exists());
}

#[test]
#[serial]
fn build_all_continues_past_failures() {
  let env = TestEnv::new(
    "include:\n  - board: a\n    artifact-name: one\n  - board: b\n    artifact-name: two_fail\n  - board: c\n    artifact-name: three\n",
  );

  env
    .cmd()
    .arg("build")
    .assert()
    .failure()
    .stdout(predicate::str::contains("Succeeded: 2"))
    .stdout(predicate::str::contains("Failed: 1"))
    .stderr(predicate::str::contains("1 of 3 build(s) failed"));

  let ws = env.workspace();
  assert!(ws.join("build/one.uf2").is_file());
  assert!(ws.join("build/three.uf2").is_file());
  assert!(!ws.join("build/two_fail.uf2").exists());
}

#[test]
#[serial]
fn uninitialized_workspace_is_initialized_first() {
  let env = TestEnv::new(CONFIG);
  std::fs::remove_dir_all(env.workspace().join(".west")).unwrap();

  env.cmd().args(["build", "corne_left"]).assert().success();

  let log = env.runtime_log();
  let init = log.find("west init -l config").unwrap();
  let build = log.find("west build").unwrap();
  assert!(init < build);
  assert!(log.contains("west zephyr-export"));
}
