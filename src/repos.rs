use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{DEFAULT_REPOSITORY_SUBPATH, PRIVATE_REPOSITORY_DIR};

/// Which local repository a project's build uses. A build may use both.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RepositoryKind {
  /// `.repository` inside the workspace.
  Private,
  /// The user's shared `~/.m2/repository`.
  Default,
}

impl RepositoryKind {
  pub(crate) fn root(&self, workspace: &Path, home: Option<&Path>) -> anyhow::Result<PathBuf> {
    match self {
      RepositoryKind::Private => Ok(workspace.join(PRIVATE_REPOSITORY_DIR)),
      RepositoryKind::Default => {
        let home = home.ok_or_else(|| anyhow::anyhow!("Can't get `home` directory's location to find the default repository!"))?;
        Ok(home.join(DEFAULT_REPOSITORY_SUBPATH))
      },
    }
  }
}

impl std::fmt::Display for RepositoryKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RepositoryKind::Private => write!(f, "{}", purge_local_repo::i18n::REPO_PRIVATE),
      RepositoryKind::Default => write!(f, "{}", purge_local_repo::i18n::REPO_DEFAULT),
    }
  }
}

/// Resolves the roots to evaluate: configured kinds first, then explicit paths. Duplicates are dropped.
pub(crate) fn resolve_roots(
  kinds: &[RepositoryKind],
  explicit: &[PathBuf],
  workspace: &Path,
  home: Option<&Path>,
) -> anyhow::Result<Vec<PathBuf>> {
  let mut roots: Vec<PathBuf> = vec![];
  for kind in kinds {
    let root = kind.root(workspace, home)?;
    if !roots.contains(&root) { roots.push(root); }
  }
  for path in explicit {
    let root = if path.is_absolute() { path.to_owned() } else { workspace.join(path) };
    if !roots.contains(&root) { roots.push(root); }
  }
  Ok(roots)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn private_and_default_roots() {
    let ws = Path::new("/builds/app");
    let home = Path::new("/home/ci");
    let roots = resolve_roots(&[RepositoryKind::Private, RepositoryKind::Default], &[], ws, Some(home)).unwrap();
    assert_eq!(roots, vec![ws.join(".repository"), home.join(".m2").join("repository")]);
  }

  #[test]
  fn explicit_roots_are_appended_once() {
    let ws = Path::new("/builds/app");
    let roots = resolve_roots(
      &[RepositoryKind::Private],
      &[PathBuf::from(".repository"), PathBuf::from("/cache/m2")],
      ws,
      None,
    ).unwrap();
    assert_eq!(roots, vec![ws.join(".repository"), PathBuf::from("/cache/m2")]);
  }

  #[test]
  fn default_repository_needs_home() {
    assert!(resolve_roots(&[RepositoryKind::Default], &[], Path::new("/ws"), None).is_err());
  }
}
