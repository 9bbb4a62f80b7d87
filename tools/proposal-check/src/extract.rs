//! Extract structured proposal / commit events from raw log lines.
//!
//! Two line shapes are recognized:
//!
//! ```text
//! ... Proposing ... SmrBlock ... proposal: <64-hex>, epoch: N, round: N,
//!     height: N, ... local_date_time: "<string>" ...
//! ... Committing ... CertifiedBlock ... block: <64-hex>, epoch: N, round: N, height: N ...
//! ```
//!
//! Fields may appear in any order within the line. A line matching neither
//! marker pair is ignored without any field extraction; a line matching a
//! marker pair but missing or mangling a required field yields no event
//! either. Neither case is an error.

use crate::types::{BlockId, LogEvent, ProposalEvent};

/// Marker pair identifying a block-proposal line.
const PROPOSAL_MARKERS: (&str, &str) = ("Proposing", "SmrBlock");
/// Marker pair identifying a block-commit line.
const COMMIT_MARKERS: (&str, &str) = ("Committing", "CertifiedBlock");

/// Attempt to extract an event from one log line.
///
/// Pure function of the line; returns `None` for irrelevant or malformed
/// lines.
pub fn extract(line: &str) -> Option<LogEvent> {
  if line.contains(PROPOSAL_MARKERS.0) && line.contains(PROPOSAL_MARKERS.1) {
    extract_proposal(line).map(LogEvent::Proposal)
  } else if line.contains(COMMIT_MARKERS.0) && line.contains(COMMIT_MARKERS.1) {
    extract_committed(line).map(LogEvent::Committed)
  } else {
    None
  }
}

fn extract_proposal(line: &str) -> Option<ProposalEvent> {
  let id = extract_block_id(line, "proposal:")?;
  let local_date_time = extract_quoted(line, "local_date_time:")?;
  Some(ProposalEvent {
    id,
    local_date_time,
  })
}

fn extract_committed(line: &str) -> Option<BlockId> {
  extract_block_id(line, "block:")
}

/// Extract the 4-tuple identity, with the hash announced by `hash_field`.
fn extract_block_id(line: &str, hash_field: &str) -> Option<BlockId> {
  let hash = extract_hash(line, hash_field)?;
  let epoch = extract_u64(line, "epoch:")?;
  let round = extract_u64(line, "round:")?;
  let height = extract_u64(line, "height:")?;
  Some(BlockId {
    hash,
    epoch,
    round,
    height,
  })
}

/// The rest of the line after the first occurrence of `field`, leading
/// whitespace trimmed.
fn after_field<'a>(line: &'a str, field: &str) -> Option<&'a str> {
  let pos = line.find(field)?;
  Some(line[pos + field.len()..].trim_start())
}

/// Extract a block hash following `field`: exactly 64 lowercase hex chars.
fn extract_hash(line: &str, field: &str) -> Option<String> {
  let rest = after_field(line, field)?;
  let end = rest
    .find(|c: char| !matches!(c, '0'..='9' | 'a'..='f'))
    .unwrap_or(rest.len());
  if end == 64 {
    Some(rest[..end].to_string())
  } else {
    None
  }
}

/// Extract a non-negative decimal integer following `field`.
fn extract_u64(line: &str, field: &str) -> Option<u64> {
  let rest = after_field(line, field)?;
  let end = rest
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(rest.len());
  rest[..end].parse().ok()
}

/// Extract a double-quoted, non-empty string value following `field`.
fn extract_quoted(line: &str, field: &str) -> Option<String> {
  let rest = after_field(line, field)?.strip_prefix('"')?;
  let end = rest.find('"')?;
  if end == 0 {
    return None;
  }
  Some(rest[..end].to_string())
}
