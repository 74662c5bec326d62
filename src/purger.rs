use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PurgeError, PurgeResult};
use crate::i18n;
use crate::namespace::resolve_under;

/// Purges `root`: everything under it when `scopes` is empty, otherwise the subtree of every
/// scope in order. Stops at the first failure.
pub fn purge(root: &Path, scopes: &[String], sink: &mut dyn Write) -> PurgeResult<()> {
  if scopes.is_empty() {
    log_line(sink, i18n::PURGING_WHOLE_REPO.replace("{}", &root.display().to_string()))?;
    return delete_contents(root);
  }

  for scope in scopes {
    let scope_root = resolve_under(root, scope);
    log_line(sink, i18n::PURGING_SCOPE.replace("{}", &scope_root.display().to_string()))?;
    delete_contents(&scope_root)?;
  }

  Ok(())
}

/// Removes every child of `dir`, keeping `dir` itself. A missing `dir` has nothing to remove.
///
/// Symlinks are unlinked, never followed.
pub fn delete_contents(dir: &Path) -> PurgeResult<()> {
  let entries = match std::fs::read_dir(dir) {
    Ok(entries) => entries,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
      debug!(path = %dir.display(), "nothing to purge");
      return Ok(());
    },
    Err(source) => return Err(deletion(dir, source)),
  };

  for entry in entries {
    let entry = entry.map_err(|e| deletion(dir, e))?;
    let path = entry.path();
    let ty = entry.file_type().map_err(|e| deletion(&path, e))?;

    let removed = if ty.is_dir() { std::fs::remove_dir_all(&path) } else { std::fs::remove_file(&path) };
    removed.map_err(|e| deletion(&path, e))?;
  }

  Ok(())
}

fn deletion(path: &Path, source: std::io::Error) -> PurgeError {
  PurgeError::Deletion { path: PathBuf::from(path), source }
}

fn log_line(sink: &mut dyn Write, line: String) -> PurgeResult<()> {
  writeln!(sink, "{}", line).map_err(PurgeError::Log)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"jar").unwrap();
  }

  fn seeded_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("org/apache/commons/commons-lang3/3.12.0/commons-lang3-3.12.0.jar"));
    touch(&root.join("com/example/app/1.0/app-1.0.pom"));
    touch(&root.join("com/other/lib/2.0/lib-2.0.jar"));
    touch(&root.join("resolver-status.properties"));
    dir
  }

  #[test]
  fn whole_purge_keeps_root_only() {
    let dir = seeded_repo();
    let mut log: Vec<u8> = vec![];

    purge(dir.path(), &[], &mut log).unwrap();

    assert!(dir.path().is_dir());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    let log = String::from_utf8(log).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains(&dir.path().display().to_string()));
  }

  #[test]
  fn scoped_purge_touches_only_scopes() {
    let dir = seeded_repo();
    let root = dir.path();
    let mut log: Vec<u8> = vec![];

    purge(root, &["com.example".to_string(), "org.apache".to_string()], &mut log).unwrap();

    assert!(root.join("com/example").is_dir());
    assert_eq!(fs::read_dir(root.join("com/example")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(root.join("org/apache")).unwrap().count(), 0);
    assert!(root.join("com/other/lib/2.0/lib-2.0.jar").exists());
    assert!(root.join("resolver-status.properties").exists());

    let log = String::from_utf8(log).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(&root.join("com").join("example").display().to_string()));
    assert!(lines[1].contains(&root.join("org").join("apache").display().to_string()));
  }

  #[test]
  fn missing_scope_is_not_an_error() {
    let dir = seeded_repo();
    purge(dir.path(), &["io.nothing".to_string()], &mut std::io::sink()).unwrap();
    assert!(!dir.path().join("io").exists());
  }

  #[test]
  fn first_failure_aborts_remaining_scopes() {
    let dir = seeded_repo();
    let root = dir.path();
    touch(&root.join("net/blocked"));

    let scopes = ["net.blocked".to_string(), "com.example".to_string()];
    let err = purge(root, &scopes, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, PurgeError::Deletion { ref path, .. } if path == &root.join("net").join("blocked")));
    assert!(root.join("com/example/app/1.0/app-1.0.pom").exists());
  }

  #[cfg(unix)]
  #[test]
  fn symlinks_are_unlinked_not_followed() {
    let outside = tempfile::tempdir().unwrap();
    touch(&outside.path().join("keep.jar"));
    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();

    delete_contents(dir.path()).unwrap();

    assert!(!dir.path().join("linked").exists());
    assert!(outside.path().join("keep.jar").exists());
  }
}
