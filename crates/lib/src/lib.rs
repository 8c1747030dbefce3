//! fwbuild-lib: build-target resolution and container build orchestration.
//!
//! This crate provides the pieces behind the `fwbuild` command:
//! - `targets`: resolves the build-target list (`build.yaml`) into ordered `BuildTarget`s
//! - `manifest`: resolves the dependency manifest (`config/west.yml`) into project names
//! - `build`: looks up a target by artifact name and drives one containerized build
//! - `fleet`: whole-config operations (build-all, list, clean, gitignore, copy)
//!
//! Process execution and filesystem side effects go through the `runner::CommandRunner`
//! and `fs::Filesystem` capabilities so that everything above them can run against fakes.

pub mod build;
pub mod consts;
pub mod container;
pub mod context;
pub mod fleet;
pub mod fs;
pub mod manifest;
pub mod preset;
pub mod runner;
pub mod settings;
pub mod targets;
pub mod util;
pub mod workspace;
