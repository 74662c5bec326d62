use inquire::validator::Validation;
use inquire::{CustomUserError, Text};
use std::path::{Path, PathBuf};

use purge_local_repo::config::check_threshold;
use purge_local_repo::i18n;
use purge_local_repo::namespace::{join_scopes, parse_scopes};

pub(crate) fn get_current_working_dir() -> std::io::Result<PathBuf> {
  std::env::current_dir()
}

pub(crate) fn workspace_or_cwd(workspace: Option<&Path>) -> anyhow::Result<PathBuf> {
  match workspace {
    Some(ws) if ws.is_absolute() => Ok(ws.to_owned()),
    Some(ws) => Ok(get_current_working_dir()?.join(ws)),
    None => Ok(get_current_working_dir()?),
  }
}

/// Prompts for a comma-separated list of group ids.
pub(crate) fn scopes_prompt(current: Option<&[String]>) -> anyhow::Result<Vec<String>> {
  let initial = current.map(join_scopes).unwrap_or_default();
  let answer = Text::new(i18n::INIT_SCOPES)
    .with_initial_value(&initial)
    .with_help_message(i18n::INIT_SCOPES_HELP)
    .prompt()?;
  Ok(parse_scopes(&answer))
}

/// Prompts for an optional positive threshold, rejecting anything else in place.
pub(crate) fn threshold_prompt(message: &str, field: &'static str, current: Option<i64>) -> anyhow::Result<Option<i64>> {
  let initial = current.map(|v| v.to_string()).unwrap_or_default();
  let answer = Text::new(message)
    .with_initial_value(&initial)
    .with_help_message(i18n::INIT_INHERIT_HELP)
    .with_validator(move |input: &str| -> Result<Validation, CustomUserError> { Ok(threshold_validation(field, input)) })
    .prompt()?;
  Ok(check_threshold(field, &answer)?)
}

fn threshold_validation(field: &'static str, input: &str) -> Validation {
  match check_threshold(field, input) {
    Ok(_) => Validation::Valid,
    Err(_) if input.trim().parse::<i64>().is_ok() => Validation::Invalid(i18n::MUST_BE_POSITIVE.into()),
    Err(_) => Validation::Invalid(format!("{} {}", input.trim(), i18n::NOT_A_NUMBER).into()),
  }
}
