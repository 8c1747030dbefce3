//! Target lookup and build driver.
//!
//! Resolves a target by artifact name and runs one containerized `west build`
//! for it, then checks that the firmware image really exists before copying it
//! to its flat location under the build root.

mod command;
mod execute;
mod types;

pub use command::west_build_args;
pub use execute::{build_by_name, build_target, prepare};
pub use types::{BuildError, BuildReport};
