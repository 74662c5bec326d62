use chrono::NaiveDateTime;

use crate::config::PurgeConfig;
use crate::state::PurgeState;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Outcome of evaluating the purge policy for one root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
  /// No record yet: the first run always purges.
  Bootstrap,
  /// Enough builds have passed since the last purge.
  BuildCount { builds: i64 },
  /// Enough days have passed since the last purge.
  Interval { days: f64 },
  NotDue,
}

impl Verdict {
  pub fn is_due(&self) -> bool {
    !matches!(self, Verdict::NotDue)
  }
}

/// Evaluates the triggers. Either configured trigger alone is enough; with none configured and a
/// record present, nothing is ever due.
pub fn evaluate(
  state: Option<&PurgeState>,
  config: &PurgeConfig,
  current_build: i64,
  now: NaiveDateTime,
) -> Verdict {
  let Some(state) = state else { return Verdict::Bootstrap };

  if let Some(min_builds) = config.min_builds() {
    let builds = current_build.saturating_sub(state.last_build_number);
    if builds >= i64::from(min_builds) {
      return Verdict::BuildCount { builds };
    }
  }

  if let Some(min_days) = config.min_interval_days() {
    let days = elapsed_days(state.last_purge, now);
    if days >= f64::from(min_days) {
      return Verdict::Interval { days };
    }
  }

  Verdict::NotDue
}

pub fn is_purge_due(
  state: Option<&PurgeState>,
  config: &PurgeConfig,
  current_build: i64,
  now: NaiveDateTime,
) -> bool {
  evaluate(state, config, current_build, now).is_due()
}

/// Fractional days between two local wall-clock readings. Ignores DST shifts.
pub fn elapsed_days(since: NaiveDateTime, now: NaiveDateTime) -> f64 {
  (now - since).num_milliseconds() as f64 / MILLIS_PER_DAY
}
