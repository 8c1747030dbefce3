use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::consts::DEPENDENCY_ROOTS;
use crate::context::Context;
use crate::fleet::FleetError;
use crate::manifest::load_manifest;

/// Paths removed by a clean.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
  pub removed: Vec<PathBuf>,
  /// False when `clean_all` was declined at the prompt.
  pub confirmed: bool,
}

fn remove_path(ctx: &Context<'_>, path: &Path, removed: &mut Vec<PathBuf>) -> Result<(), FleetError> {
  if ctx.fs.is_dir(path) {
    ctx.fs.remove_dir_all(path)?;
  } else if ctx.fs.is_file(path) {
    ctx.fs.remove_file(path)?;
  } else {
    return Ok(());
  }
  info!(path = %path.display(), "removed");
  removed.push(path.to_path_buf());
  Ok(())
}

/// Remove one target's build directory and flat firmware, or the whole build root.
///
/// # Errors
///
/// `FleetError::InvalidTarget` if `target` is not a single plain path component,
/// so nothing outside the build root can be reached.
pub fn clean(ctx: &Context<'_>, target: Option<&str>) -> Result<CleanReport, FleetError> {
  let settings = ctx.settings;
  let paths = match target {
    Some(name) if !is_plain_dir_name(name) => {
      return Err(FleetError::InvalidTarget { name: name.to_string() });
    }
    Some(name) => vec![settings.target_build_dir(name), settings.flat_artifact_path(name)],
    None => vec![settings.build_root()],
  };

  let mut removed = Vec::new();
  for path in &paths {
    remove_path(ctx, path, &mut removed)?;
  }
  Ok(CleanReport {
    removed,
    confirmed: true,
  })
}

/// Target and manifest names must stay a single directory inside their parent.
fn is_plain_dir_name(name: &str) -> bool {
  let mut components = Path::new(name).components();
  matches!(
    (components.next(), components.next()),
    (Some(Component::Normal(_)), None)
  )
}

/// Everything `clean_all` would remove, in removal order, without duplicates.
pub fn clean_all_paths(ctx: &Context<'_>) -> Result<Vec<PathBuf>, FleetError> {
  let settings = ctx.settings;
  let entries = load_manifest(ctx.fs, &settings.manifest_path())?;

  let mut paths = vec![settings.build_root()];
  for entry in &entries {
    if !is_plain_dir_name(&entry.name) {
      warn!(name = %entry.name, "skipping manifest project that is not a plain directory name");
      continue;
    }
    paths.push(settings.workspace.join(&entry.name));
  }
  paths.extend(DEPENDENCY_ROOTS.iter().map(|root| settings.workspace.join(root)));

  let mut unique = Vec::with_capacity(paths.len());
  for path in paths {
    if !unique.contains(&path) {
      unique.push(path);
    }
  }
  Ok(unique)
}

/// Remove build output and every fetched dependency after confirmation.
///
/// `confirm` receives the paths that exist and would be removed. Nothing is
/// touched unless it returns `Ok(true)`.
pub fn clean_all<F>(ctx: &Context<'_>, confirm: F) -> Result<CleanReport, FleetError>
where
  F: FnOnce(&[PathBuf]) -> std::io::Result<bool>,
{
  let existing: Vec<PathBuf> = clean_all_paths(ctx)?
    .into_iter()
    .filter(|p| ctx.fs.exists(p))
    .collect();
  if existing.is_empty() {
    return Ok(CleanReport {
      removed: Vec::new(),
      confirmed: true,
    });
  }

  if !confirm(&existing).map_err(FleetError::Prompt)? {
    info!("clean_all declined");
    return Ok(CleanReport::default());
  }

  let mut removed = Vec::new();
  for path in &existing {
    remove_path(ctx, path, &mut removed)?;
  }
  Ok(CleanReport {
    removed,
    confirmed: true,
  })
}
