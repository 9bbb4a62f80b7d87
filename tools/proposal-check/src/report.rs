//! Serialize the classified records to the configured sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ScanError;
use crate::types::ClassifiedRecord;

/// Indentation unit for the pretty-printed report.
const JSON_INDENT: &[u8] = b"    ";

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
  Stdout,
  /// Append to this file (created if absent).
  Append(PathBuf),
}

impl ReportSink {
  /// Render the whole collection and write it with a single call; partial
  /// output is never produced. Failure here is fatal for the run.
  pub fn write(&self, records: &[ClassifiedRecord]) -> Result<(), ScanError> {
    let mut rendered = render(records)?;
    match self {
      Self::Stdout => {
        rendered.push(b'\n');
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(&rendered)?;
        out.flush()?;
      }
      Self::Append(path) => {
        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        file.write_all(&rendered)?;
        file.flush()?;
      }
    }
    Ok(())
  }
}

/// Render the records as a 4-space-indented JSON array, stable field order.
fn render(records: &[ClassifiedRecord]) -> Result<Vec<u8>, ScanError> {
  let mut buf = Vec::new();
  let formatter = PrettyFormatter::with_indent(JSON_INDENT);
  let mut serializer = Serializer::with_formatter(&mut buf, formatter);
  records.serialize(&mut serializer)?;
  Ok(buf)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn record(height: u64, committed: bool) -> ClassifiedRecord {
    ClassifiedRecord {
      block_timestamp_local_date_time: "2025-05-15 10:30:00".into(),
      block_hash: "ab".repeat(32),
      epoch: 3,
      round: 1,
      height,
      committed,
    }
  }

  #[test]
  fn render_uses_four_space_indent_and_stable_field_order() {
    let out = render(&[record(10, true)]).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("[\n    {\n"));
    let field_order = [
      "block_timestamp_local_date_time",
      "block_hash",
      "epoch",
      "round",
      "height",
      "committed",
    ];
    let positions: Vec<usize> = field_order
      .iter()
      .map(|f| text.find(&format!("\"{}\"", f)).expect(f))
      .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "fields must serialize in declared order");
    assert!(text.contains("\n        \"epoch\": 3,"));
  }

  #[test]
  fn empty_report_renders_empty_array() {
    let out = render(&[]).unwrap();
    assert_eq!(out, b"[]");
  }

  #[test]
  fn append_sink_appends_across_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let sink = ReportSink::Append(path.clone());

    sink.write(&[record(10, true)]).unwrap();
    sink.write(&[record(11, false)]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("\"block_hash\"").count(), 2);
    assert!(!text.ends_with('\n'), "file sink adds no trailing newline");
  }

  #[test]
  fn append_sink_to_unwritable_destination_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::Append(dir.path().join("missing").join("report.json"));
    let err = sink.write(&[record(10, true)]).unwrap_err();
    assert!(matches!(err, ScanError::Report(_)));
  }
}
