use chrono::{Local, NaiveDateTime};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::PurgeConfig;
use crate::decision::{evaluate, Verdict};
use crate::error::PurgeResult;
use crate::purger::purge;
use crate::state::{self, truncate_to_seconds, PurgeState};

/// What a single invocation did to a root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
  Purged(Verdict),
  Skipped,
}

/// Wall-clock snapshot for one invocation, in local time with second precision.
pub fn now_local() -> NaiveDateTime {
  truncate_to_seconds(Local::now().naive_local())
}

/// Evaluates and, when due, purges one repository root, then records the purge.
///
/// The record is written only after the purge has succeeded; any failure leaves it untouched.
pub fn run(
  root: &Path,
  config: &PurgeConfig,
  build_number: i64,
  now: NaiveDateTime,
  sink: &mut dyn Write,
) -> PurgeResult<Outcome> {
  let last = state::load(root)?;
  let verdict = evaluate(last.as_ref(), config, build_number, now);
  debug!(root = %root.display(), build_number, ?last, ?verdict, "purge policy evaluated");

  if !verdict.is_due() {
    return Ok(Outcome::Skipped);
  }

  purge(root, config.scopes(), sink)?;
  state::save(root, &PurgeState::new(build_number, now))?;
  info!(root = %root.display(), build_number, ?verdict, "repository purged");

  Ok(Outcome::Purged(verdict))
}

/// Runs every root independently against the same wall-clock snapshot.
///
/// A failing root doesn't stop the others; results come back in `roots` order.
pub fn run_all(
  roots: &[PathBuf],
  config: &PurgeConfig,
  build_number: i64,
  now: NaiveDateTime,
  sink: &mut dyn Write,
) -> Vec<(PathBuf, PurgeResult<Outcome>)> {
  let mut results = Vec::with_capacity(roots.len());
  for root in roots {
    results.push((root.clone(), run(root, config, build_number, now, &mut *sink)));
  }
  results
}
