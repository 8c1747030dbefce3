mod build;
mod clean;
mod copy;
mod gitignore;
mod init;
mod list;
mod update;

pub use build::{cmd_build, cmd_build_preset};
pub use clean::{cmd_clean, cmd_clean_all};
pub use copy::cmd_copy;
pub use gitignore::cmd_gitignore;
pub use init::cmd_init;
pub use list::cmd_list;
pub use update::cmd_update;

use fwbuild_lib::build::BuildError;
use fwbuild_lib::fleet::FleetError;
use fwbuild_lib::manifest::ManifestError;
use fwbuild_lib::targets::TargetsError;
use fwbuild_lib::workspace::WorkspaceError;

use crate::output::{print_error, print_hint};

/// Remediation hint of the error returned by the library, if it carries one.
///
/// Only the outermost error is downcast; anyhow context layers pass through.
fn remediation(err: &anyhow::Error) -> Option<String> {
  if let Some(err) = err.downcast_ref::<BuildError>() {
    return err.remediation();
  }
  if let Some(err) = err.downcast_ref::<FleetError>() {
    return err.remediation();
  }
  if let Some(err) = err.downcast_ref::<WorkspaceError>() {
    return err.remediation().map(ToString::to_string);
  }
  if let Some(err) = err.downcast_ref::<TargetsError>() {
    return Some(err.remediation().to_string());
  }
  if let Some(err) = err.downcast_ref::<ManifestError>() {
    return Some(err.remediation().to_string());
  }
  None
}

/// Print a failed command's error chain and hint to stderr.
pub fn report_error(err: &anyhow::Error) {
  print_error(&err.to_string());
  for cause in err.chain().skip(1) {
    print_hint(&format!("caused by: {}", cause));
  }
  if let Some(hint) = remediation(err) {
    print_hint(&hint);
  }
}
