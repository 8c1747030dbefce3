//! Process-wide settings.
//!
//! Built once at startup from the environment (and the CLI's leading flags) and
//! passed by reference into every operation. Nothing here is mutated afterwards.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::{
  ARTIFACT_EXTENSION, ARTIFACT_RELATIVE_PATH, BUILD_CONFIG_FILENAME, BUILD_ROOT, DEFAULT_IMAGE, DEFAULT_RUNTIME,
  FIRMWARE_DIR, MANIFEST_PATH, WORKSPACE_PREFIX,
};

pub const ENV_RUNTIME: &str = "FWBUILD_RUNTIME";
pub const ENV_IMAGE: &str = "FWBUILD_IMAGE";
pub const ENV_CONFIG: &str = "FWBUILD_CONFIG";
pub const ENV_KEYBOARD: &str = "FWBUILD_KEYBOARD";
pub const ENV_INCREMENTAL: &str = "FWBUILD_INCREMENTAL";
pub const ENV_WORKSPACE: &str = "FWBUILD_WORKSPACE";

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("failed to resolve current directory: {0}")]
  CurrentDir(#[source] std::io::Error),

  #[error("workspace directory {} is not accessible: {source}", path.display())]
  Workspace { path: PathBuf, source: std::io::Error },

  #[error("cannot derive keyboard name from workspace {}; set {ENV_KEYBOARD}", path.display())]
  NoKeyboard { path: PathBuf },
}

/// Immutable configuration for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  /// Absolute workspace root, mounted into the container.
  pub workspace: PathBuf,
  /// Container runtime binary (`docker`, `podman`, ...).
  pub runtime: String,
  /// Container image reference.
  pub image: String,
  /// Build target list.
  pub build_config: PathBuf,
  /// Keyboard identifier used by the preset build commands.
  pub keyboard: String,
  /// Reuse build directories instead of building pristine.
  pub incremental: bool,
}

impl Settings {
  /// Settings with defaults for a workspace, without looking at the environment.
  pub fn for_workspace(workspace: impl Into<PathBuf>, keyboard: impl Into<String>) -> Self {
    let workspace = workspace.into();
    Self {
      build_config: workspace.join(BUILD_CONFIG_FILENAME),
      workspace,
      runtime: DEFAULT_RUNTIME.to_string(),
      image: DEFAULT_IMAGE.to_string(),
      keyboard: keyboard.into(),
      incremental: false,
    }
  }

  /// Read settings from the environment.
  ///
  /// `incremental` from the command line wins over `FWBUILD_INCREMENTAL`.
  pub fn from_env(incremental: bool) -> Result<Self, SettingsError> {
    let workspace = match non_empty_var(ENV_WORKSPACE) {
      Some(dir) => PathBuf::from(dir),
      None => std::env::current_dir().map_err(SettingsError::CurrentDir)?,
    };
    let workspace = dunce::canonicalize(&workspace).map_err(|source| SettingsError::Workspace {
      path: workspace.clone(),
      source,
    })?;

    let keyboard = match non_empty_var(ENV_KEYBOARD) {
      Some(name) => name,
      None => keyboard_from_workspace(&workspace).ok_or_else(|| SettingsError::NoKeyboard {
        path: workspace.clone(),
      })?,
    };

    let mut settings = Self::for_workspace(workspace, keyboard);
    if let Some(runtime) = non_empty_var(ENV_RUNTIME) {
      settings.runtime = runtime;
    }
    if let Some(image) = non_empty_var(ENV_IMAGE) {
      settings.image = image;
    }
    if let Some(config) = non_empty_var(ENV_CONFIG) {
      // relative paths are taken from the workspace, not the caller's cwd
      settings.build_config = settings.workspace.join(config);
    }
    settings.incremental = incremental || non_empty_var(ENV_INCREMENTAL).is_some_and(|v| parse_flag(&v));

    Ok(settings)
  }

  pub fn manifest_path(&self) -> PathBuf {
    self.workspace.join(MANIFEST_PATH)
  }

  pub fn build_root(&self) -> PathBuf {
    self.workspace.join(BUILD_ROOT)
  }

  /// Build directory of one target.
  pub fn target_build_dir(&self, artifact_name: &str) -> PathBuf {
    self.build_root().join(artifact_name)
  }

  /// Firmware image produced inside a target's build directory.
  pub fn artifact_path(&self, artifact_name: &str) -> PathBuf {
    self.target_build_dir(artifact_name).join(ARTIFACT_RELATIVE_PATH)
  }

  /// Flat copy of a target's firmware next to its build directory.
  pub fn flat_artifact_path(&self, artifact_name: &str) -> PathBuf {
    self.build_root().join(artifact_file_name(artifact_name))
  }

  pub fn default_copy_dest(&self) -> PathBuf {
    self.workspace.join(FIRMWARE_DIR)
  }
}

/// File name of a target's flat firmware copy.
pub fn artifact_file_name(artifact_name: &str) -> String {
  format!("{artifact_name}.{ARTIFACT_EXTENSION}")
}

/// Keyboard name from a `zmk-config-<name>` workspace, or the directory name itself.
pub fn keyboard_from_workspace(workspace: &Path) -> Option<String> {
  let dir_name = workspace.file_name()?.to_str()?;
  let name = dir_name.strip_prefix(WORKSPACE_PREFIX).unwrap_or(dir_name);
  if name.is_empty() { None } else { Some(name.to_string()) }
}

fn non_empty_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
  matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
