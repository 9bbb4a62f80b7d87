//! Correlate proposal and commit events across log sources and classify.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extract;
use crate::source;
use crate::types::{BlockId, ClassifiedRecord, LogEvent, ProposalEvent};

/// Builds the proposal index and the committed set while scanning sources,
/// then classifies every observed proposal. Owns all run state; nothing is
/// persisted across runs.
pub struct Correlator {
  config: ScanConfig,
  /// Proposals in first-insertion order; overwrites keep their slot.
  proposals: Vec<ProposalEvent>,
  /// local_date_time -> slot in `proposals`. Last write wins on duplicate
  /// timestamps.
  by_timestamp: HashMap<String, usize>,
  /// Every committed block identity seen, deduplicated.
  committed: HashSet<BlockId>,
}

impl Correlator {
  pub fn new(config: ScanConfig) -> Self {
    Self {
      config,
      proposals: Vec::new(),
      by_timestamp: HashMap::new(),
      committed: HashSet::new(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(ScanConfig::default())
  }

  /// Record one extracted event.
  pub fn record(&mut self, event: LogEvent) {
    match event {
      LogEvent::Proposal(proposal) => {
        match self.by_timestamp.get(&proposal.local_date_time) {
          Some(&slot) => self.proposals[slot] = proposal,
          None => {
            self
              .by_timestamp
              .insert(proposal.local_date_time.clone(), self.proposals.len());
            self.proposals.push(proposal);
          }
        }
      }
      LogEvent::Committed(id) => {
        self.committed.insert(id);
      }
    }
  }

  /// Scan one log source, decompressing it first when configured and the
  /// name carries the `.gz` suffix. The decompressed artifact is deleted
  /// again before this returns, on the error path too.
  ///
  /// Errors are per-source and recoverable: report them and continue with
  /// the remaining sources. Events extracted before a mid-file failure stay
  /// recorded.
  pub fn scan_source(&mut self, path: &Path) -> Result<(), ScanError> {
    if self.config.decompress && source::is_compressed(path) {
      let artifact = source::decompress(path)?;
      self.scan_lines(artifact.path())
      // `artifact` drops here and removes the decompressed file.
    } else {
      self.scan_lines(path)
    }
  }

  fn scan_lines(&mut self, path: &Path) -> Result<(), ScanError> {
    let read_err = |e| ScanError::Read {
      path: path.to_path_buf(),
      source: e,
    };
    let file = File::open(path).map_err(read_err)?;
    for line in BufReader::new(file).lines() {
      let line = line.map_err(read_err)?;
      if let Some(event) = extract::extract(&line) {
        self.record(event);
      }
    }
    Ok(())
  }

  /// Classify every indexed proposal and return the report records sorted
  /// by height ascending. The sort is stable: equal heights keep the order
  /// in which their timestamps were first indexed.
  pub fn finish(self) -> Vec<ClassifiedRecord> {
    let Self {
      proposals,
      committed,
      ..
    } = self;
    let mut records: Vec<ClassifiedRecord> = proposals
      .into_iter()
      .map(|p| {
        let is_committed = committed.contains(&p.id);
        ClassifiedRecord {
          block_timestamp_local_date_time: p.local_date_time,
          block_hash: p.id.hash,
          epoch: p.id.epoch,
          round: p.id.round,
          height: p.id.height,
          committed: is_committed,
        }
      })
      .collect();
    records.sort_by_key(|r| r.height);
    records
  }
}
