//! Terminal output helpers.
//!
//! Status lines go to stdout, problems to stderr. Colors are only emitted when
//! the stream supports them, so piped output stays plain.

use std::fmt::Display;
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
  pub const REMOVE: &str = "-";
}

#[derive(Debug, Clone, Copy)]
enum Level {
  Success,
  Error,
  Warning,
  Info,
}

impl Level {
  fn stream(self) -> Stream {
    match self {
      Level::Success | Level::Info => Stream::Stdout,
      Level::Error | Level::Warning => Stream::Stderr,
    }
  }

  fn symbol(self) -> String {
    let stream = self.stream();
    match self {
      Level::Success => symbols::SUCCESS.if_supports_color(stream, |s| s.green()).to_string(),
      Level::Error => symbols::ERROR.if_supports_color(stream, |s| s.red()).to_string(),
      Level::Warning => symbols::WARNING.if_supports_color(stream, |s| s.yellow()).to_string(),
      Level::Info => symbols::INFO.if_supports_color(stream, |s| s.blue()).to_string(),
    }
  }

  fn print(self, message: &str) {
    match self.stream() {
      Stream::Stdout => println!("{} {}", self.symbol(), message),
      _ => eprintln!("{} {}", self.symbol(), message),
    }
  }
}

/// `850ms`, `12.4s`, `3m 07s`.
pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  match secs {
    0 => format!("{}ms", duration.subsec_millis()),
    1..=59 => format!("{:.1}s", duration.as_secs_f64()),
    _ => format!("{}m {:02}s", secs / 60, secs % 60),
  }
}

pub fn print_success(message: &str) {
  Level::Success.print(message);
}

pub fn print_error(message: &str) {
  Level::Error.print(message);
}

pub fn print_warning(message: &str) {
  Level::Warning.print(message);
}

pub fn print_info(message: &str) {
  Level::Info.print(message);
}

/// Indented hint under an error.
pub fn print_hint(message: &str) {
  eprintln!(
    "  {} {}",
    symbols::ARROW.if_supports_color(Stream::Stderr, |s| s.cyan()),
    message
  );
}

/// Indented list entry, e.g. a removed or copied path.
pub fn print_item(symbol: &str, item: impl Display) {
  println!("  {} {}", symbol, item);
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
