//! Persisted "last purge" record, one per repository root.
//!
//! The record is a properties-style text file kept beside the root (`<root>.purge.properties`),
//! so purging the whole root never removes it.

use chrono::{NaiveDateTime, Timelike};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PurgeError, PurgeResult};

pub const LAST_BUILD_NUMBER_KEY: &str = "purge.lastBuildNumber";
pub const LAST_DATE_KEY: &str = "purge.lastDate";
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const STATE_FILE_SUFFIX: &str = ".purge.properties";
const HEADER: &str = "settings of the purge-local-repo tool";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurgeState {
  pub last_build_number: i64,
  pub last_purge: NaiveDateTime,
}

impl PurgeState {
  /// Drops sub-second precision, matching what the record can hold.
  pub fn new(last_build_number: i64, last_purge: NaiveDateTime) -> Self {
    Self { last_build_number, last_purge: truncate_to_seconds(last_purge) }
  }
}

pub(crate) fn truncate_to_seconds(t: NaiveDateTime) -> NaiveDateTime {
  t.with_nanosecond(0).unwrap_or(t)
}

pub fn format_timestamp(t: &NaiveDateTime) -> String {
  t.format(DATE_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
  NaiveDateTime::parse_from_str(text, DATE_FORMAT)
}

/// Location of the state record for `root`.
pub fn state_file_path(root: &Path) -> PurgeResult<PathBuf> {
  let name = root.file_name().ok_or_else(|| PurgeError::InvalidRoot(root.to_path_buf()))?;
  let mut file_name = name.to_os_string();
  file_name.push(STATE_FILE_SUFFIX);
  Ok(root.with_file_name(file_name))
}

/// Reads the record for `root`. `None` means the root was never purged.
pub fn load(root: &Path) -> PurgeResult<Option<PurgeState>> {
  let path = state_file_path(root)?;
  let text = match std::fs::read_to_string(&path) {
    Ok(text) => text,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
    Err(source) => return Err(PurgeError::StateIo { path, source }),
  };

  let entries = parse_properties(&text);
  let lookup = |key: &str| {
    entries
      .iter()
      .rev()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
      .ok_or_else(|| PurgeError::corrupt(&path, format!("missing `{}`", key)))
  };

  let build = lookup(LAST_BUILD_NUMBER_KEY)?;
  let last_build_number = build
    .trim()
    .parse::<i64>()
    .map_err(|_| PurgeError::corrupt(&path, format!("`{}` is not a build number", build)))?;

  let date = lookup(LAST_DATE_KEY)?;
  let last_purge = parse_timestamp(date.trim())
    .map_err(|e| PurgeError::corrupt(&path, format!("`{}` is not a timestamp: {}", date, e)))?;

  Ok(Some(PurgeState { last_build_number, last_purge }))
}

/// Replaces the record for `root`. Call only after the purge itself has completed.
///
/// Missing parent directories are created, so a root that doesn't exist yet still gets its record.
pub fn save(root: &Path, state: &PurgeState) -> PurgeResult<()> {
  let path = state_file_path(root)?;
  let mut tmp = path.clone().into_os_string();
  tmp.push(".tmp");
  let tmp = PathBuf::from(tmp);

  let io_err = |source| PurgeError::StateIo { path: path.clone(), source };

  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).map_err(io_err)?;
  }

  let written = write_record(&tmp, state).and_then(|_| std::fs::rename(&tmp, &path));
  if let Err(e) = written {
    let _ = std::fs::remove_file(&tmp);
    return Err(io_err(e));
  }

  Ok(())
}

fn write_record(tmp: &Path, state: &PurgeState) -> std::io::Result<()> {
  let mut writer = BufWriter::new(File::create(tmp)?);
  writeln!(writer, "#{}", HEADER)?;
  writeln!(writer, "{}={}", LAST_BUILD_NUMBER_KEY, state.last_build_number)?;
  writeln!(writer, "{}={}", LAST_DATE_KEY, format_timestamp(&state.last_purge))?;
  writer.into_inner().map_err(|e| e.into_error())?.sync_all()
}

/// Minimal reader for `java.util.Properties`-style text: `key=value` or `key:value` lines,
/// `#`/`!` comments, backslash escapes. Line continuations are not supported.
fn parse_properties(text: &str) -> Vec<(String, String)> {
  let mut entries = vec![];
  for line in text.lines() {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') { continue }

    let mut key = String::new();
    let mut chars = line.chars();
    let mut escaped = false;
    let mut has_separator = false;
    for c in chars.by_ref() {
      if escaped {
        key.push(c);
        escaped = false;
      } else if c == '\\' {
        escaped = true;
      } else if c == '=' || c == ':' {
        has_separator = true;
        break;
      } else {
        key.push(c);
      }
    }
    if !has_separator { continue }

    entries.push((key.trim().to_owned(), unescape(chars.as_str().trim_start())));
  }
  entries
}

fn unescape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars();
  while let Some(c) = chars.next() {
    if c == '\\' {
      if let Some(next) = chars.next() { out.push(next) }
    } else {
      out.push(c);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(h, m, s).unwrap()
  }

  #[test]
  fn state_file_sits_beside_root() {
    let path = state_file_path(Path::new("/ws/.repository")).unwrap();
    assert_eq!(path, Path::new("/ws/.repository.purge.properties"));
    assert!(state_file_path(Path::new("/")).is_err());
  }

  #[test]
  fn missing_record_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load(&dir.path().join("repository")).unwrap(), None);
  }

  #[test]
  fn save_then_load_keeps_build_and_second() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("repository");
    let when = at(10, 20, 30).with_nanosecond(750_000_000).unwrap();

    save(&root, &PurgeState::new(42, when)).unwrap();
    let loaded = load(&root).unwrap().unwrap();

    assert_eq!(loaded.last_build_number, 42);
    assert_eq!(loaded.last_purge, at(10, 20, 30));
    assert!(!state_file_path(&root).unwrap().with_extension("properties.tmp").exists());
  }

  #[test]
  fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("home").join(".m2").join("repository");

    save(&root, &PurgeState::new(1, at(9, 0, 0))).unwrap();

    assert!(state_file_path(&root).unwrap().is_file());
    assert_eq!(load(&root).unwrap(), Some(PurgeState::new(1, at(9, 0, 0))));
  }

  #[test]
  fn failed_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("repository");
    let record = state_file_path(&root).unwrap();
    std::fs::create_dir_all(record.join("occupied")).unwrap();

    let err = save(&root, &PurgeState::new(1, at(9, 0, 0))).unwrap_err();

    assert!(matches!(err, PurgeError::StateIo { .. }));
    assert!(!record.with_extension("properties.tmp").exists());
  }

  #[test]
  fn save_overwrites_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("repository");
    save(&root, &PurgeState::new(1, at(1, 0, 0))).unwrap();
    save(&root, &PurgeState::new(2, at(2, 0, 0))).unwrap();
    assert_eq!(load(&root).unwrap(), Some(PurgeState::new(2, at(2, 0, 0))));
  }

  #[test]
  fn reads_records_with_escaped_colons() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("repository");
    std::fs::write(
      state_file_path(&root).unwrap(),
      "#settings of the purge-local-repo-plugin\n#Fri Mar 01 10:20:30 CET 2024\npurge.lastDate=2024-03-01T10\\:20\\:30\npurge.lastBuildNumber=7\n",
    ).unwrap();

    assert_eq!(load(&root).unwrap(), Some(PurgeState::new(7, at(10, 20, 30))));
  }

  #[test]
  fn non_numeric_build_number_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("repository");
    std::fs::write(
      state_file_path(&root).unwrap(),
      "purge.lastBuildNumber=abc\npurge.lastDate=2024-03-01T10:20:30\n",
    ).unwrap();

    assert!(matches!(load(&root), Err(PurgeError::StateCorrupt { .. })));
  }

  #[test]
  fn missing_or_bad_date_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("repository");
    let file = state_file_path(&root).unwrap();

    std::fs::write(&file, "purge.lastBuildNumber=3\n").unwrap();
    assert!(matches!(load(&root), Err(PurgeError::StateCorrupt { .. })));

    std::fs::write(&file, "purge.lastBuildNumber=3\npurge.lastDate=yesterday\n").unwrap();
    assert!(matches!(load(&root), Err(PurgeError::StateCorrupt { .. })));
  }

  #[test]
  fn parses_both_separators_and_comments() {
    let entries = parse_properties("! comment\n# other\na = 1\nb:2\n  c=x\\=y\nnoseparator\n");
    assert_eq!(entries, vec![
      ("a".to_string(), "1".to_string()),
      ("b".to_string(), "2".to_string()),
      ("c".to_string(), "x=y".to_string()),
    ]);
  }
}
