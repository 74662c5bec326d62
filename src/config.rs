use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::{PurgeError, PurgeResult};
use crate::namespace::parse_scopes;

pub const NUMBER_OF_BUILDS: &str = "numberOfBuilds";
pub const NUMBER_OF_DAYS: &str = "numberOfDays";

/// Effective purge configuration for one invocation.
///
/// Thresholds are validated on construction, so an existing `PurgeConfig` is always usable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurgeConfig {
  scopes: Vec<String>,
  min_builds: Option<NonZeroU32>,
  min_interval_days: Option<NonZeroU32>,
}

impl PurgeConfig {
  pub fn new(
    scopes: Vec<String>,
    min_builds: Option<i64>,
    min_interval_days: Option<i64>,
  ) -> PurgeResult<Self> {
    Ok(Self {
      scopes,
      min_builds: positive(NUMBER_OF_BUILDS, min_builds)?,
      min_interval_days: positive(NUMBER_OF_DAYS, min_interval_days)?,
    })
  }

  /// Namespaces to purge; empty means the whole repository.
  pub fn scopes(&self) -> &[String] {
    &self.scopes
  }

  pub fn min_builds(&self) -> Option<u32> {
    self.min_builds.map(NonZeroU32::get)
  }

  pub fn min_interval_days(&self) -> Option<u32> {
    self.min_interval_days.map(NonZeroU32::get)
  }
}

fn positive(field: &'static str, value: Option<i64>) -> PurgeResult<Option<NonZeroU32>> {
  let Some(value) = value else { return Ok(None) };
  if value <= 0 {
    return Err(PurgeError::config(field, "must be > 0"));
  }
  u32::try_from(value)
    .ok()
    .and_then(NonZeroU32::new)
    .map(Some)
    .ok_or_else(|| PurgeError::config(field, format!("{} is too large", value)))
}

/// Настройки очистки: глобальные значения по умолчанию или переопределения проекта.
///
/// Незаданное поле наследуется от нижележащего уровня.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct PurgeSettings {
  /// Группы (`org.apache.commons`), которые нужно очищать.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scopes: Option<Vec<String>>,
  /// Минимальное число сборок между очистками.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub number_of_builds: Option<i64>,
  /// Минимальное число дней между очистками.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub number_of_days: Option<i64>,
}

impl PurgeSettings {
  /// Builds settings from the raw textual fields, failing on malformed thresholds.
  pub fn from_fields(scopes: &str, number_of_builds: &str, number_of_days: &str) -> PurgeResult<Self> {
    let scopes = parse_scopes(scopes);
    Ok(Self {
      scopes: if scopes.is_empty() { None } else { Some(scopes) },
      number_of_builds: check_threshold(NUMBER_OF_BUILDS, number_of_builds)?,
      number_of_days: check_threshold(NUMBER_OF_DAYS, number_of_days)?,
    })
  }

  /// Field-by-field merge: values set on `self` win over `defaults`.
  pub fn overlay(&self, defaults: &PurgeSettings) -> PurgeSettings {
    PurgeSettings {
      scopes: self.scopes.clone().or_else(|| defaults.scopes.clone()),
      number_of_builds: self.number_of_builds.or(defaults.number_of_builds),
      number_of_days: self.number_of_days.or(defaults.number_of_days),
    }
  }

  /// Validates the settings into an effective configuration.
  pub fn resolve(&self) -> PurgeResult<PurgeConfig> {
    PurgeConfig::new(
      self.scopes.clone().unwrap_or_default(),
      self.number_of_builds,
      self.number_of_days,
    )
  }

  pub fn validate(&self) -> PurgeResult<()> {
    self.resolve().map(|_| ())
  }
}

/// Checks a textual threshold: empty means unset, anything else must be an integer > 0.
pub fn check_threshold(field: &'static str, text: &str) -> PurgeResult<Option<i64>> {
  let text = text.trim();
  if text.is_empty() {
    return Ok(None);
  }
  let value = text
    .parse::<i64>()
    .map_err(|_| PurgeError::config(field, format!("{} is no valid number", text)))?;
  positive(field, Some(value))?;
  Ok(Some(value))
}
