//! Everything an operation needs, bundled once and passed by reference.

use crate::container::Container;
use crate::fs::Filesystem;
use crate::runner::CommandRunner;
use crate::settings::Settings;

#[derive(Clone, Copy)]
pub struct Context<'a> {
  pub settings: &'a Settings,
  pub fs: &'a dyn Filesystem,
  pub runner: &'a dyn CommandRunner,
}

impl<'a> Context<'a> {
  pub fn new(settings: &'a Settings, fs: &'a dyn Filesystem, runner: &'a dyn CommandRunner) -> Self {
    Self { settings, fs, runner }
  }

  pub fn container(&self) -> Container {
    Container::from_settings(self.settings)
  }
}
