use serde::{Deserialize, Serialize};

use purge_local_repo::PurgeSettings;

use crate::repos::RepositoryKind;

/// Конфигурация проекта.
#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub(crate) struct PurgeProjectOptions {
  /// Переопределения глобальных настроек очистки.
  #[serde(default)]
  pub(crate) settings: PurgeSettings,
  /// Репозитории, которые использует сборка проекта.
  #[serde(default)]
  pub(crate) repositories: Vec<RepositoryKind>,
  /// Счётчик сборок, если хост не передаёт номер сборки явно.
  #[serde(default)]
  pub(crate) build_counter: i64,
}

impl PurgeProjectOptions {
  /// Следующий номер сборки по внутреннему счётчику.
  pub(crate) fn next_build_number(&mut self) -> i64 {
    self.build_counter += 1;
    self.build_counter
  }
}

/// Глобальная конфигурация: значения по умолчанию для всех проектов.
#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub(crate) struct PurgeGlobalConfig {
  #[serde(default)]
  pub(crate) defaults: PurgeSettings,
}
