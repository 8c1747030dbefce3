//! Fixed names shared across the crate.

pub const APP_NAME: &str = "fwbuild";

/// Default container runtime binary.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Default build image.
pub const DEFAULT_IMAGE: &str = "zmkfirmware/zmk-build-arm:stable";

/// Build target list, relative to the workspace.
pub const BUILD_CONFIG_FILENAME: &str = "build.yaml";

/// Dependency manifest, relative to the workspace.
pub const MANIFEST_PATH: &str = "config/west.yml";

/// Directory holding the user's keyboard configuration, relative to the workspace.
pub const CONFIG_DIR: &str = "config";

/// Root of all build output, relative to the workspace.
pub const BUILD_ROOT: &str = "build";

/// Default destination for `copy`.
pub const FIRMWARE_DIR: &str = "firmware";

/// Firmware image produced inside each target's build directory.
pub const ARTIFACT_RELATIVE_PATH: &str = "zephyr/zmk.uf2";

/// Extension of the flat copies named after each target.
pub const ARTIFACT_EXTENSION: &str = "uf2";

/// Marker directory created by `west init`.
pub const WEST_DIR: &str = ".west";

/// Dependency roots that exist after `west update`, removed by `clean_all`.
pub const DEPENDENCY_ROOTS: &[&str] = &[WEST_DIR, "zmk", "zephyr", "modules", "bootloader", "tools"];

/// Mount point of the workspace inside the container.
pub const CONTAINER_WORKSPACE: &str = "/workspace";

/// Mount point of the shared scratch directory inside the container.
pub const CONTAINER_TMP: &str = "/tmp/fwbuild";

/// Application sources inside the workspace after `west update`.
pub const ZMK_APP_DIR: &str = "zmk/app";

/// Workspace directory prefix stripped when deriving the keyboard name.
pub const WORKSPACE_PREFIX: &str = "zmk-config-";

/// Artifact name built by `build_reset`.
pub const RESET_ARTIFACT: &str = "settings_reset";

/// Entries written at the top of every generated `.gitignore`.
pub const GITIGNORE_PREAMBLE: &[&str] = &["build/", "firmware/", "*.uf2", ".west/"];
