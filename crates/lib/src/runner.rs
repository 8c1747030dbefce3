//! External command execution.
//!
//! Everything that leaves the process (container runtime, image pulls, builds)
//! goes through [`CommandRunner`] so that the orchestration code can be tested
//! against a recording fake.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

/// A command line to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<String>,
  /// Working directory; inherits the caller's when `None`.
  pub cwd: Option<PathBuf>,
  /// Discard output instead of passing it through to the terminal.
  pub quiet: bool,
}

impl Invocation {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: None,
      quiet: false,
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cwd = Some(dir.into());
    self
  }

  pub fn quiet(mut self) -> Self {
    self.quiet = true;
    self
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {arg}")?;
    }
    Ok(())
  }
}

/// Outcome of a command that was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
  pub code: Option<i32>,
}

impl RunStatus {
  pub const SUCCESS: RunStatus = RunStatus { code: Some(0) };

  pub fn failed(code: i32) -> Self {
    Self { code: Some(code) }
  }

  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

#[derive(Debug, Error)]
pub enum RunnerError {
  #[error("failed to start `{program}`: {source}")]
  Spawn { program: String, source: std::io::Error },
}

/// Runs external commands to completion.
pub trait CommandRunner {
  /// Run `invocation` and block until it exits.
  ///
  /// A non-zero exit is reported through [`RunStatus`], not as an error.
  fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError>;
}

/// Runs commands as child processes of this one.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
  fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError> {
    info!(cmd = %invocation, "executing command");

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    if let Some(cwd) = &invocation.cwd {
      command.current_dir(cwd);
    }
    if invocation.quiet {
      command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    let status = command.status().map_err(|source| RunnerError::Spawn {
      program: invocation.program.clone(),
      source,
    })?;

    debug!(program = %invocation.program, code = ?status.code(), "command exited");
    Ok(RunStatus { code: status.code() })
  }
}
