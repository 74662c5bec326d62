use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::warn;

use purge_local_repo::{i18n, now_local, run_all, state, Outcome, PurgeConfig, Verdict};

use crate::cmd::{RunArgs, StatusArgs};
use crate::configs::{PurgeGlobalConfig, PurgeProjectOptions};
use crate::repos::resolve_roots;
use crate::rw::{build_log, generate_build_log_filepath, BuildLog};

/// Effective configuration: project settings over global defaults, validated.
pub(crate) fn effective_config(
  globals: &PurgeGlobalConfig,
  config: &PurgeProjectOptions,
) -> anyhow::Result<PurgeConfig> {
  Ok(config.settings.overlay(&globals.defaults).resolve()?)
}

fn project_roots(config: &PurgeProjectOptions, explicit: &[PathBuf], workspace: &Path) -> anyhow::Result<Vec<PathBuf>> {
  let roots = resolve_roots(&config.repositories, explicit, workspace, dirs::home_dir().as_deref())?;
  if roots.is_empty() { anyhow::bail!(i18n::NO_REPOSITORIES) }
  Ok(roots)
}

/// Runs the purge policy on every repository of the project before a build.
///
/// All roots are attempted; the call fails afterwards if any of them failed.
pub(crate) fn purge_before_build(
  globals: &PurgeGlobalConfig,
  config: &mut PurgeProjectOptions,
  workspace: &Path,
  cache_dir: &Path,
  args: &RunArgs,
) -> anyhow::Result<()> {
  let effective = effective_config(globals, config)?;
  let roots = project_roots(config, &args.repositories, workspace)?;

  let build_number = match args.build_number {
    Some(n) => {
      config.build_counter = config.build_counter.max(n);
      n
    },
    None => config.next_build_number(),
  };

  let log_path = args.log_file.clone().unwrap_or_else(|| generate_build_log_filepath(cache_dir));
  let mut log = BuildLog::open(&log_path, true)?;

  let results = run_all(&roots, &effective, build_number, now_local(), &mut log);

  let mut failed = 0usize;
  for (root, result) in &results {
    let status = match result {
      Ok(Outcome::Purged(verdict)) => format!("{} ({})", i18n::PURGED.green(), describe(verdict)),
      Ok(Outcome::Skipped) => i18n::NOT_DUE.blue().to_string(),
      Err(e) => {
        failed += 1;
        warn!(root = %root.display(), error = %e, "purge failed");
        format!("{}: {}", i18n::FAILED.red(), e)
      },
    };
    build_log(&mut log, &[format!("`{}`: {}", root.display(), status)])?;
  }

  if failed > 0 {
    anyhow::bail!(i18n::SOME_REPOS_FAILED.replace("{}", &failed.to_string()));
  }

  Ok(())
}

/// Why a purged root was due.
fn describe(verdict: &Verdict) -> String {
  match verdict {
    Verdict::BuildCount { builds } => i18n::REASON_BUILDS.replace("{}", &builds.to_string()),
    Verdict::Interval { days } => i18n::REASON_DAYS.replace("{}", &format!("{:.1}", days)),
    _ => i18n::REASON_BOOTSTRAP.to_string(),
  }
}

/// Prints the effective settings and the last purge of each repository.
pub(crate) fn status(
  globals: &PurgeGlobalConfig,
  config: &PurgeProjectOptions,
  workspace: &Path,
  args: &StatusArgs,
) -> anyhow::Result<()> {
  let effective = effective_config(globals, config)?;
  let roots = project_roots(config, &args.repositories, workspace)?;

  for line in describe_config(&effective) {
    println!("{}", line);
  }
  println!();

  for root in &roots {
    let last = match state::load(root) {
      Ok(None) => i18n::NEVER_PURGED.to_string(),
      Ok(Some(s)) => i18n::LAST_PURGE
        .replace("{1}", &s.last_build_number.to_string())
        .replace("{2}", &state::format_timestamp(&s.last_purge)),
      Err(e) => format!("{}: {}", i18n::STATE_UNREADABLE.red(), e),
    };
    println!("• {} - {}", root.display().to_string().blue().bold(), last);
  }

  Ok(())
}

fn describe_config(config: &PurgeConfig) -> Vec<String> {
  let scopes = if config.scopes().is_empty() {
    i18n::WHOLE_REPOSITORY.to_string()
  } else {
    config.scopes().join(", ")
  };
  let threshold = |v: Option<u32>| v.map(|v| v.to_string()).unwrap_or_else(|| i18n::NOT_SET.to_string());

  vec![
    i18n::STATUS_EFFECTIVE.to_string(),
    format!("\t{}: {}", i18n::SCOPES, scopes.green()),
    format!("\t{}: {}", i18n::NUMBER_OF_BUILDS, threshold(config.min_builds()).green()),
    format!("\t{}: {}", i18n::NUMBER_OF_DAYS, threshold(config.min_interval_days()).green()),
  ]
}
