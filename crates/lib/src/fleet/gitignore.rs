use std::path::PathBuf;

use tracing::info;

use crate::consts::GITIGNORE_PREAMBLE;
use crate::context::Context;
use crate::fleet::FleetError;
use crate::manifest::{ManifestEntry, load_manifest};

/// Fixed preamble followed by one `<name>/` line per manifest project.
pub fn gitignore_contents(entries: &[ManifestEntry]) -> String {
  let mut out = String::new();
  for line in GITIGNORE_PREAMBLE {
    out.push_str(line);
    out.push('\n');
  }
  for entry in entries {
    out.push_str(&entry.name);
    out.push_str("/\n");
  }
  out
}

/// Regenerate the workspace `.gitignore` from the manifest.
pub fn write_gitignore(ctx: &Context<'_>) -> Result<PathBuf, FleetError> {
  let settings = ctx.settings;
  let entries = load_manifest(ctx.fs, &settings.manifest_path())?;
  let path = settings.workspace.join(".gitignore");

  ctx.fs.write_atomic(&path, &gitignore_contents(&entries))?;
  info!(path = %path.display(), projects = entries.len(), "wrote .gitignore");
  Ok(path)
}
