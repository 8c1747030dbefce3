mod cmd;
mod output;
mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fwbuild_lib::preset::Preset;
use fwbuild_lib::settings::Settings;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// fwbuild - containerized ZMK firmware builds driven by build.yaml
#[derive(Parser)]
#[command(name = "fwbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Reuse existing build directories instead of building pristine
  #[arg(short, long, global = true)]
  incremental: bool,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
enum Commands {
  /// Initialize the west workspace inside the container
  Init,

  /// Fetch or refresh every manifest project
  Update,

  /// Show the resolved build targets
  List {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },

  /// Build the <keyboard>_dongle target
  BuildDongle,

  /// Build the <keyboard>_left target
  BuildLeft,

  /// Build the <keyboard>_right target
  BuildRight,

  /// Build the <keyboard>_central_left target
  BuildCentralLeft,

  /// Build the settings_reset target
  BuildReset,

  /// Build one target by artifact name, or every target when no name is given
  Build {
    /// Artifact name of the target to build
    name: Option<String>,
  },

  /// Remove build output for one target, or the whole build directory
  Clean {
    /// Artifact name of the target to clean
    target: Option<String>,
  },

  /// Remove build output and every fetched dependency
  CleanAll {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
  },

  /// Write a .gitignore covering build output and fetched dependencies
  Gitignore,

  /// Copy built firmware images into one directory
  Copy {
    /// Destination directory (default: <workspace>/firmware)
    dest: Option<PathBuf>,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      cmd::report_error(&err);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let settings = Settings::from_env(cli.incremental)?;
  debug!(
    workspace = %settings.workspace.display(),
    runtime = %settings.runtime,
    image = %settings.image,
    incremental = settings.incremental,
    "resolved settings"
  );

  match cli.command {
    Commands::Init => cmd::cmd_init(&settings),
    Commands::Update => cmd::cmd_update(&settings),
    Commands::List { output } => cmd::cmd_list(&settings, output),
    Commands::BuildDongle => cmd::cmd_build_preset(&settings, Preset::Dongle),
    Commands::BuildLeft => cmd::cmd_build_preset(&settings, Preset::Left),
    Commands::BuildRight => cmd::cmd_build_preset(&settings, Preset::Right),
    Commands::BuildCentralLeft => cmd::cmd_build_preset(&settings, Preset::CentralLeft),
    Commands::BuildReset => cmd::cmd_build_preset(&settings, Preset::Reset),
    Commands::Build { name } => cmd::cmd_build(&settings, name.as_deref()),
    Commands::Clean { target } => cmd::cmd_clean(&settings, target.as_deref()),
    Commands::CleanAll { force } => cmd::cmd_clean_all(&settings, force),
    Commands::Gitignore => cmd::cmd_gitignore(&settings),
    Commands::Copy { dest } => cmd::cmd_copy(&settings, dest),
  }
}
