use crate::consts::{BUILD_ROOT, CONFIG_DIR, CONTAINER_WORKSPACE, ZMK_APP_DIR};
use crate::targets::BuildTarget;

/// `west build` command line for one target, run from the container workspace.
///
/// Board is always passed. Snippet, shield and extra arguments are only added
/// when set. Without `incremental` the build directory is rebuilt pristine.
pub fn west_build_args(target: &BuildTarget, incremental: bool) -> Vec<String> {
  let mut args: Vec<String> = vec![
    "west".into(),
    "build".into(),
    "-s".into(),
    ZMK_APP_DIR.into(),
    "-d".into(),
    format!("{BUILD_ROOT}/{}", target.artifact_name),
    "-b".into(),
    target.board.clone(),
  ];
  if !incremental {
    args.push("-p".into());
  }
  if let Some(snippet) = &target.snippet {
    args.push("-S".into());
    args.push(snippet.clone());
  }

  args.push("--".into());
  args.push(format!("-DZMK_CONFIG={CONTAINER_WORKSPACE}/{CONFIG_DIR}"));
  if let Some(shield) = &target.shield {
    args.push(format!("-DSHIELD={shield}"));
  }
  args.extend(target.extra_args_tokens().into_iter().map(String::from));
  args
}
