use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::build::{BuildError, BuildReport, build_target, prepare};
use crate::context::Context;
use crate::targets::BuildTarget;

/// Outcome of building every target.
#[derive(Debug)]
pub struct BuildSummary {
  pub succeeded: Vec<BuildReport>,
  pub failed: Vec<(String, BuildError)>,
  pub elapsed: Duration,
}

impl BuildSummary {
  pub fn is_success(&self) -> bool {
    self.failed.is_empty()
  }

  pub fn total(&self) -> usize {
    self.succeeded.len() + self.failed.len()
  }
}

/// Build every target in order, one at a time.
///
/// A failing target is recorded and the next one still runs. Only errors that
/// make further builds pointless (preparation, runtime disappearing) stop the
/// batch. `on_result` is called after each target.
pub fn build_all<F>(ctx: &Context<'_>, targets: &[BuildTarget], mut on_result: F) -> Result<BuildSummary, BuildError>
where
  F: FnMut(&BuildTarget, &Result<BuildReport, BuildError>),
{
  let start = Instant::now();
  prepare(ctx)?;

  let mut succeeded = Vec::new();
  let mut failed = Vec::new();

  for (index, target) in targets.iter().enumerate() {
    info!(
      target = %target.artifact_name,
      position = index + 1,
      total = targets.len(),
      "starting build"
    );
    let result = build_target(ctx, target);
    on_result(target, &result);
    match result {
      Ok(report) => succeeded.push(report),
      Err(err) if err.is_fatal() => return Err(err),
      Err(err) => {
        warn!(target = %target.artifact_name, error = %err, "build failed");
        failed.push((target.artifact_name.clone(), err));
      }
    }
  }

  Ok(BuildSummary {
    succeeded,
    failed,
    elapsed: start.elapsed(),
  })
}
