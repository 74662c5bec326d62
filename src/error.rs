use std::path::PathBuf;

use thiserror::Error;

pub type PurgeResult<T> = Result<T, PurgeError>;

/// Failures of the purge engine. Nothing here is retried; every variant propagates up to the host.
#[derive(Debug, Error)]
pub enum PurgeError {
  /// A configured threshold is not a positive number.
  #[error("invalid `{field}`: {reason}")]
  Configuration { field: &'static str, reason: String },

  /// The state record exists but can't be understood.
  #[error("purge state `{}` is corrupt: {reason}", .path.display())]
  StateCorrupt { path: PathBuf, reason: String },

  /// The state record can't be read or written.
  #[error("can't access purge state `{}`: {source}", .path.display())]
  StateIo { path: PathBuf, #[source] source: std::io::Error },

  /// Removing cached content failed.
  #[error("can't delete `{}`: {source}", .path.display())]
  Deletion { path: PathBuf, #[source] source: std::io::Error },

  /// The build log sink refused a line.
  #[error("can't write to the build log: {0}")]
  Log(#[source] std::io::Error),

  /// The repository root has no usable location for its state record.
  #[error("`{}` can't be used as a repository root", .0.display())]
  InvalidRoot(PathBuf),
}

impl PurgeError {
  pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
    PurgeError::Configuration { field, reason: reason.into() }
  }

  pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
    PurgeError::StateCorrupt { path: path.into(), reason: reason.into() }
  }
}
