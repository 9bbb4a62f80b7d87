//! Resolve an input path into readable log sources, with transparent gzip
//! decompression and cleanup of the decompressed artifact.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::ScanError;

// ---------------------------------------------------------------------------
// Input enumeration
// ---------------------------------------------------------------------------

/// The resolved input: a single log file or a directory of rotated logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogInput {
  File(PathBuf),
  Directory(PathBuf),
}

impl LogInput {
  /// Classify `path`. Anything that is neither a regular file nor a
  /// directory is a fatal input error.
  pub fn resolve(path: &Path) -> Result<Self, ScanError> {
    if path.is_file() {
      Ok(Self::File(path.to_path_buf()))
    } else if path.is_dir() {
      Ok(Self::Directory(path.to_path_buf()))
    } else {
      Err(ScanError::InvalidPath(path.to_path_buf()))
    }
  }

  /// Enumerate the concrete log sources, in scan order.
  ///
  /// A directory contributes every regular file it directly contains,
  /// sorted by name; subdirectories are not descended into. Failing to list
  /// the directory is fatal, since it is the input path itself.
  pub fn sources(&self) -> Result<Vec<PathBuf>, ScanError> {
    match self {
      Self::File(path) => Ok(vec![path.clone()]),
      Self::Directory(dir) => {
        let read_err = |e| ScanError::Read {
          path: dir.clone(),
          source: e,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
          let path = entry.map_err(read_err)?.path();
          if path.is_file() {
            files.push(path);
          }
        }
        files.sort();
        Ok(files)
      }
    }
  }
}

// ---------------------------------------------------------------------------
// Decompression
// ---------------------------------------------------------------------------

/// Extension marking a source as gzip-compressed.
pub const GZ_EXTENSION: &str = "gz";

/// Does the source name carry the gzip extension?
pub fn is_compressed(path: &Path) -> bool {
  path.extension().map_or(false, |ext| ext == GZ_EXTENSION)
}

/// Deletes the decompressed artifact when dropped, so a compressed source
/// leaves no residue behind, read failures included.
#[derive(Debug)]
pub struct DecompressedLog {
  path: PathBuf,
}

impl DecompressedLog {
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Drop for DecompressedLog {
  fn drop(&mut self) {
    if let Err(e) = fs::remove_file(&self.path) {
      // Undeletable artifacts are recoverable: report and move on.
      eprintln!(
        "proposal-check: failed to delete decompressed file {}: {}",
        self.path.display(),
        e
      );
    }
  }
}

/// Decompress a `.gz` source next to itself (source path minus the suffix)
/// and return a guard owning the artifact.
///
/// On failure the partial artifact has already been cleaned up and the
/// caller should skip the source.
pub fn decompress(path: &Path) -> Result<DecompressedLog, ScanError> {
  let gz_err = |e| ScanError::Decompress {
    path: path.to_path_buf(),
    source: e,
  };

  let input = File::open(path).map_err(gz_err)?;
  let mut decoder = GzDecoder::new(BufReader::new(input));
  let output = File::create(path.with_extension("")).map_err(gz_err)?;

  // The guard exists before any bytes are copied; an error below drops it
  // and removes the partial artifact.
  let artifact = DecompressedLog {
    path: path.with_extension(""),
  };
  let mut writer = BufWriter::new(output);
  io::copy(&mut decoder, &mut writer).map_err(gz_err)?;
  writer.flush().map_err(gz_err)?;
  Ok(artifact)
}
