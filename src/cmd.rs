use clap::{Args, Subcommand, Parser};
use std::path::PathBuf;

/// Purge your local Maven repository before the build, when it's due.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
  /// Command
  #[command(subcommand)]
  pub(crate) r#type: PurgeExecType,
  /// Verbose
  #[arg(short, global = true)]
  pub(crate) verbose: bool,
  /// Specify config folder
  #[arg(long, global = true)]
  pub(crate) config_folder: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum PurgeExecType {
  /// Purge the project's repositories if due
  Run(RunArgs),
  /// Set up purge settings for the project
  Init(WorkspaceArgs),
  /// Edit global purge defaults
  Global(GlobalArgs),
  /// Print the effective settings and the last purge of each repository
  Status(StatusArgs),
}

#[derive(Args, Debug)]
pub(crate) struct WorkspaceArgs {
  /// Project workspace (current directory by default)
  #[arg(short, long)]
  pub(crate) workspace: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
  #[command(flatten)]
  pub(crate) workspace: WorkspaceArgs,
  /// Current build number (the project's build counter is used when omitted)
  #[arg(short, long)]
  pub(crate) build_number: Option<i64>,
  /// Additional repository root, may be repeated
  #[arg(short, long = "repository")]
  pub(crate) repositories: Vec<PathBuf>,
  /// Append the purge log to this file
  #[arg(long)]
  pub(crate) log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct StatusArgs {
  #[command(flatten)]
  pub(crate) workspace: WorkspaceArgs,
  /// Additional repository root, may be repeated
  #[arg(short, long = "repository")]
  pub(crate) repositories: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct GlobalArgs {
  /// Comma-separated group ids, e.g. `org.apache,com.example`
  #[arg(long)]
  pub(crate) scopes: Option<String>,
  /// Purge after this many builds
  #[arg(long)]
  pub(crate) number_of_builds: Option<String>,
  /// Purge after this many days
  #[arg(long)]
  pub(crate) number_of_days: Option<String>,
  /// Reset all global defaults
  #[arg(long, conflicts_with_all = ["scopes", "number_of_builds", "number_of_days"])]
  pub(crate) clear: bool,
}
