//! proposal-check: classify a validator's block proposals as committed or not.
//!
//! Usage:
//!   proposal-check <path> [--decompress] [--output-file <file>]
//!
//! <path> is a log file or a directory of rotated logs. With --decompress,
//! `.gz` sources are unpacked before scanning and the unpacked copy removed
//! afterwards. The JSON report goes to stdout, or is appended to the
//! --output-file when given.
//!
//! A node that keeps producing `"committed": false` proposals usually either
//! has a local consensus key that no longer matches the one registered
//! on-chain (rotate the key and wait for the next epoch to begin), or cannot
//! deliver its proposals to enough of the current committee within the
//! consensus timeout (under-provisioned host, co-located nodes, or network
//! trouble).

use proposal_check::{Correlator, LogInput, ReportSink, ScanConfig};
use std::env;
use std::path::PathBuf;
use std::process;

fn usage(code: i32) -> ! {
  eprintln!("Usage: proposal-check <path> [--decompress] [--output-file <file>]");
  eprintln!("  <path>                log file or directory of rotated logs");
  eprintln!("  --decompress          unpack .gz sources before scanning");
  eprintln!("  --output-file <file>  append the JSON report to <file> instead of stdout");
  process::exit(code);
}

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();
  let mut decompress = false;
  let mut output_file: Option<PathBuf> = None;
  let mut path: Option<PathBuf> = None;

  let mut i = 0;
  while i < args.len() {
    match args[i].as_str() {
      "-h" | "--help" => usage(0),
      "--decompress" => decompress = true,
      "--output-file" => {
        i += 1;
        match args.get(i) {
          Some(value) => output_file = Some(PathBuf::from(value)),
          None => {
            eprintln!("proposal-check: --output-file needs a value");
            usage(2);
          }
        }
      }
      flag if flag.starts_with('-') => {
        eprintln!("proposal-check: unknown flag {}", flag);
        usage(2);
      }
      value => {
        if path.is_some() {
          eprintln!("proposal-check: expected exactly one path");
          usage(2);
        }
        path = Some(PathBuf::from(value));
      }
    }
    i += 1;
  }

  let path = path.unwrap_or_else(|| usage(2));

  let input = match LogInput::resolve(&path) {
    Ok(input) => input,
    Err(e) => {
      eprintln!("proposal-check: {}", e);
      process::exit(1);
    }
  };
  let sources = match input.sources() {
    Ok(sources) => sources,
    Err(e) => {
      eprintln!("proposal-check: {}", e);
      process::exit(1);
    }
  };

  let mut correlator = Correlator::new(ScanConfig { decompress });
  for source in &sources {
    if let Err(e) = correlator.scan_source(source) {
      // Per-source failures are recoverable; keep going with the rest.
      eprintln!("proposal-check: skipping source: {}", e);
    }
  }

  let records = correlator.finish();
  let sink = match output_file {
    Some(file) => ReportSink::Append(file),
    None => ReportSink::Stdout,
  };
  if let Err(e) = sink.write(&records) {
    eprintln!("proposal-check: {}", e);
    process::exit(1);
  }
}
