//! Mapping of group identifiers (`org.apache.commons`) onto repository directories (`org/apache/commons`).

use std::path::{Path, PathBuf};

/// Splits a group identifier into directory segments.
///
/// Empty tokens (`org..apache`, a trailing dot) are skipped. Segment content is passed through as is.
pub fn to_relative_path(namespace: &str) -> Vec<&str> {
  namespace.split('.').filter(|s| !s.is_empty()).collect()
}

/// Descends from `root` along the namespace's segments.
pub fn resolve_under(root: &Path, namespace: &str) -> PathBuf {
  let mut path = root.to_path_buf();
  for segment in to_relative_path(namespace) {
    path.push(segment);
  }
  path
}

/// Parses the comma-separated `scopes` field. An empty list means "the whole repository".
pub fn parse_scopes(text: &str) -> Vec<String> {
  text
    .split(',')
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .map(|s| s.to_owned())
    .collect()
}

/// Inverse of [`parse_scopes`], used when showing or saving the field.
pub fn join_scopes(scopes: &[String]) -> String {
  scopes.join(",")
}
