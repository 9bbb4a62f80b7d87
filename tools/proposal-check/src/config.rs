//! Run options.

/// Options controlling one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
  /// Decompress `.gz` sources before scanning them. The decompressed copy
  /// is deleted again once its source has been consumed.
  pub decompress: bool,
}
