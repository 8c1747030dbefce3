use crate::targets::BuildTarget;

/// One-line description of a target for listings.
pub fn describe_target(target: &BuildTarget) -> String {
  let mut parts = vec![format!("board={}", target.board)];
  if let Some(shield) = &target.shield {
    parts.push(format!("shield={shield}"));
  }
  if let Some(snippet) = &target.snippet {
    parts.push(format!("snippet={snippet}"));
  }
  if let Some(args) = &target.extra_args {
    parts.push(format!("args={args}"));
  }
  parts.join(" ")
}
