//! Structured error types for the proposal checker.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
  /// The input path is neither a regular file nor a directory. Fatal.
  #[error("{} is not a valid file or directory", .0.display())]
  InvalidPath(PathBuf),

  /// A log source could not be read. Recoverable; skip the source.
  #[error("read {}: {}", .path.display(), .source)]
  Read { path: PathBuf, source: io::Error },

  /// A compressed source could not be decompressed. Recoverable; skip it.
  #[error("decompress {}: {}", .path.display(), .source)]
  Decompress { path: PathBuf, source: io::Error },

  /// The final report could not be written. Fatal.
  #[error("write report: {0}")]
  Report(#[from] io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
