//! Core types for the proposal checker (internal models + JSON output contract).

use serde::Serialize;

// ---------------------------------------------------------------------------
// Block identity
// ---------------------------------------------------------------------------

/// The 4-tuple identity of a proposed or committed block.
///
/// Commit matching is exact on all four fields: a proposal was committed iff
/// its hash, epoch, round, and height all reappear in a commit event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId {
  /// 64 lowercase hex characters, as printed in the log.
  pub hash: String,
  pub epoch: u64,
  pub round: u64,
  pub height: u64,
}

// ---------------------------------------------------------------------------
// Extracted events (what the extractor yields per line)
// ---------------------------------------------------------------------------

/// A block this validator offered for consensus agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalEvent {
  pub id: BlockId,
  /// Validator-local wall-clock string, kept opaque. Used as the
  /// deduplication key for proposals, never as part of the block identity.
  pub local_date_time: String,
}

/// One event extracted from a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
  Proposal(ProposalEvent),
  Committed(BlockId),
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One classified proposal in the final report. Field order is the output
/// contract.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRecord {
  pub block_timestamp_local_date_time: String,
  pub block_hash: String,
  pub epoch: u64,
  pub round: u64,
  pub height: u64,
  pub committed: bool,
}
