//! Block Proposal Commit-Status Checker — deterministic, offline.
//!
//! Scans a validator's log file (or a directory of rotated logs, optionally
//! gzip-compressed), extracts block-proposal and certified-block-commit
//! events, and classifies every proposal as committed or not by exact
//! (hash, epoch, round, height) match. Emits the height-ordered result as
//! JSON.
//!
//! No DB, no network; pure file scanning + in-memory state.

pub mod config;
pub mod correlate;
pub mod error;
pub mod extract;
pub mod report;
pub mod source;
pub mod types;

pub use config::ScanConfig;
pub use correlate::Correlator;
pub use error::ScanError;
pub use report::ReportSink;
pub use source::LogInput;
pub use types::ClassifiedRecord;
