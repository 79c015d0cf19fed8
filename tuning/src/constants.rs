//! Unit constants and fixed policy thresholds for flavor tuning.
//!
//! All byte-valued tuning outputs are computed from binary-prefixed units.
//! The thresholds here are fleet-wide policy, independent of any single
//! node's declared hardware.

/// One mebibyte (1,048,576 bytes).
pub const MB: u64 = 1024 * 1024;

/// One gibibyte (1,024 MB).
pub const GB: u64 = 1024 * MB;

/// Write-speed hint reported for nodes on fast storage media (abstract
/// throughput units understood by the backend).
pub const FAST_DISK_WRITE_SPEED: f64 = 200.0;

/// Write-speed hint reported for nodes on slow storage media.
pub const SLOW_DISK_WRITE_SPEED: f64 = 40.0;

/// Threshold below which the backend classifies a *measured* disk write
/// speed as slow at runtime. Fixed policy, independent of the declared
/// disk class.
pub const SLOW_WRITE_SPEED_LIMIT: f64 = 100.0;

/// Floor for the document-store background thread pool. Covers small and
/// shared nodes where halving the core count would starve the store.
pub const MIN_DOCUMENT_STORE_THREADS: u32 = 8;

/// Fraction of node memory reserved for flush buffering (1/8 = 12.5%).
pub const FLUSH_MEMORY_DIVISOR: u64 = 8;

/// Fraction of node disk reserved for the transaction log.
pub const TLS_DISK_FRACTION: f64 = 0.07;

/// Fleet-wide ceiling on retained transaction-log size. Replay time scales
/// with log size; an unbounded fraction would make recovery time
/// unpredictable on large-disk nodes.
pub const MAX_TLS_SIZE: u64 = 100 * GB;
