use inquire::MultiSelect;

use purge_local_repo::config::{NUMBER_OF_BUILDS, NUMBER_OF_DAYS};
use purge_local_repo::i18n;
use purge_local_repo::PurgeSettings;

use crate::configs::PurgeProjectOptions;
use crate::repos::RepositoryKind;
use crate::utils::{scopes_prompt, threshold_prompt};

pub(crate) fn init(config: &mut PurgeProjectOptions) -> anyhow::Result<()> {
  let scopes = scopes_prompt(config.settings.scopes.as_deref())?;
  let number_of_builds = threshold_prompt(i18n::INIT_BUILDS, NUMBER_OF_BUILDS, config.settings.number_of_builds)?;
  let number_of_days = threshold_prompt(i18n::INIT_DAYS, NUMBER_OF_DAYS, config.settings.number_of_days)?;

  let kinds = vec![RepositoryKind::Private, RepositoryKind::Default];
  let defaults = kinds
    .iter()
    .enumerate()
    .filter(|&(_, k)| if config.repositories.is_empty() { *k == RepositoryKind::Default } else { config.repositories.contains(k) })
    .map(|(i, _)| i)
    .collect::<Vec<_>>();
  let repositories = MultiSelect::new(i18n::INIT_REPOS, kinds).with_default(&defaults).prompt()?;

  config.settings = PurgeSettings {
    scopes: if scopes.is_empty() { None } else { Some(scopes) },
    number_of_builds,
    number_of_days,
  };
  config.repositories = repositories;

  println!("{}", i18n::INIT_DONE);

  Ok(())
}
