#![warn(clippy::todo, clippy::unimplemented)]

mod cmd;
mod configs;
mod logging;
mod repos;
mod rw;
mod utils;

mod init;
mod build;

use crate::build::{purge_before_build, status};
use crate::cmd::{Cli, GlobalArgs, PurgeExecType};
use crate::configs::{PurgeGlobalConfig, PurgeProjectOptions};
use crate::init::init;
use crate::logging::init_logging;
use crate::rw::{read, write};
use crate::utils::workspace_or_cwd;

use clap::Parser;
use colored::Colorize;
use dirs::{config_dir, cache_dir};
use mimalloc::MiMalloc;
use std::path::PathBuf;

use purge_local_repo::i18n;
use purge_local_repo::PurgeSettings;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

static PURGE_CONF_FILE: &str = "purge-config.json";
static PURGE_GLOBAL_CONF_FILE: &str = "purge-global.json";
pub(crate) static APP_SUBDIR: &str = "purge-local-repo";
pub(crate) static LOGS_SUBDIR: &str = "logs";
pub(crate) static PRIVATE_REPOSITORY_DIR: &str = ".repository";
pub(crate) static DEFAULT_REPOSITORY_SUBPATH: &str = ".m2/repository";

fn main() {
  let args = Cli::parse();
  init_logging(args.verbose);

  if let Err(e) = run(args) {
    eprintln!();
    eprintln!("{} {:#}", "An error occured:".red(), e);
    std::process::exit(1);
  }
}

fn run(args: Cli) -> anyhow::Result<()> {
  // Определение рабочих директорий
  let config_folder = match args.config_folder {
    Some(folder) => folder,
    None => config_dir()
      .ok_or_else(|| anyhow::anyhow!("Can't get `config` directory's location automatically, please specify one."))?
      .join(APP_SUBDIR),
  };

  // Чтение конфигов
  let mut globals = read::<PurgeGlobalConfig>(&config_folder, PURGE_GLOBAL_CONF_FILE)?;

  match args.r#type {
    PurgeExecType::Run(run_args) => {
      let workspace = workspace_or_cwd(run_args.workspace.workspace.as_deref())?;
      let cache_folder = cache_folder()?;
      let mut config = read::<PurgeProjectOptions>(&workspace, PURGE_CONF_FILE)?;

      let result = purge_before_build(&globals, &mut config, &workspace, &cache_folder, &run_args);
      write(&workspace, PURGE_CONF_FILE, &config)?;
      result
    },
    PurgeExecType::Init(ws_args) => {
      let workspace = workspace_or_cwd(ws_args.workspace.as_deref())?;
      let mut config = read::<PurgeProjectOptions>(&workspace, PURGE_CONF_FILE)?;
      init(&mut config)?;
      write(&workspace, PURGE_CONF_FILE, &config)
    },
    PurgeExecType::Global(global_args) => {
      edit_globals(&mut globals, &global_args)?;
      write(&config_folder, PURGE_GLOBAL_CONF_FILE, &globals)
    },
    PurgeExecType::Status(status_args) => {
      let workspace = workspace_or_cwd(status_args.workspace.workspace.as_deref())?;
      let config = read::<PurgeProjectOptions>(&workspace, PURGE_CONF_FILE)?;
      status(&globals, &config, &workspace, &status_args)
    },
  }
}

fn cache_folder() -> anyhow::Result<PathBuf> {
  Ok(
    cache_dir()
      .ok_or_else(|| anyhow::anyhow!("Can't get `cache` directory's location automatically, please specify `--log-file`."))?
      .join(APP_SUBDIR)
  )
}

/// Applies `global` arguments; an empty value unsets the field. Invalid values are rejected before anything is saved.
fn edit_globals(globals: &mut PurgeGlobalConfig, args: &GlobalArgs) -> anyhow::Result<()> {
  if args.clear {
    globals.defaults = PurgeSettings::default();
    println!("{}", i18n::GLOBAL_CLEARED);
    return Ok(())
  }

  let current = &globals.defaults;
  let parsed = PurgeSettings::from_fields(
    args.scopes.as_deref().unwrap_or_default(),
    args.number_of_builds.as_deref().unwrap_or_default(),
    args.number_of_days.as_deref().unwrap_or_default(),
  )?;

  let updated = PurgeSettings {
    scopes: if args.scopes.is_some() { parsed.scopes } else { current.scopes.clone() },
    number_of_builds: if args.number_of_builds.is_some() { parsed.number_of_builds } else { current.number_of_builds },
    number_of_days: if args.number_of_days.is_some() { parsed.number_of_days } else { current.number_of_days },
  };
  updated.validate()?;

  globals.defaults = updated;
  println!("{}", i18n::GLOBAL_SAVED);

  Ok(())
}
