//! Interactive confirmation before destructive commands.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::output::symbols;

fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Show `paths` and ask whether to delete them.
///
/// `force` skips the prompt. Without a terminal on both stdin and stderr the
/// question cannot be asked, so this fails instead of guessing.
pub fn confirm_removal(paths: &[PathBuf], force: bool) -> Result<bool> {
  if force {
    return Ok(true);
  }
  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!("Refusing to delete without confirmation in non-interactive mode. Use --force to proceed.");
  }

  let mut stderr = io::stderr().lock();
  writeln!(stderr, "The following paths will be removed:")?;
  for path in paths {
    writeln!(stderr, "  {} {}", symbols::REMOVE, path.display())?;
  }
  write!(stderr, "Remove {} path(s)? [y/N] ", paths.len())?;
  stderr.flush()?;

  let mut answer = String::new();
  io::stdin().lock().read_line(&mut answer)?;
  Ok(is_yes(&answer))
}
