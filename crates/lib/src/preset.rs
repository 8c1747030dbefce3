//! Named shortcuts for the usual split-keyboard targets.

use crate::consts::RESET_ARTIFACT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  Dongle,
  Left,
  Right,
  CentralLeft,
  Reset,
}

impl Preset {
  /// Artifact name this preset builds for `keyboard`.
  pub fn artifact_name(self, keyboard: &str) -> String {
    match self {
      Preset::Dongle => format!("{keyboard}_dongle"),
      Preset::Left => format!("{keyboard}_left"),
      Preset::Right => format!("{keyboard}_right"),
      Preset::CentralLeft => format!("{keyboard}_central_left"),
      Preset::Reset => RESET_ARTIFACT.to_string(),
    }
  }
}
