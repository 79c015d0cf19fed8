//! The derived tuning configuration handed to the backend's config loader.
//!
//! Field grouping mirrors the backend's own config schema: hardware info for
//! self-reporting, document-store limits, and flush-strategy budgets. This
//! crate defines the field set and semantics only; serialization format and
//! delivery belong to the surrounding config-assembly system.

use serde::{Deserialize, Serialize};

/// Complete tuning parameter set for one backend node, produced fresh per
/// [`tune`](crate::tune) call. Every field is derived deterministically from
/// the input [`NodeFlavor`](crate::NodeFlavor) alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Hardware hints the backend uses for self-reporting.
    pub hwinfo: HwInfo,
    /// Document-store file and thread limits.
    pub document_store: DocumentStoreTuning,
    /// Flush-strategy memory and transaction-log budgets.
    pub flush: FlushTuning,
}

/// Hardware hints: echoes of the flavor's resources plus disk-speed policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HwInfo {
    pub disk: HwDisk,
    pub memory: HwMemory,
}

/// Disk hints reported to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HwDisk {
    /// Allotted disk capacity in bytes (pass-through from the flavor).
    pub size_bytes: u64,
    /// Declared write throughput (abstract units): 200 for fast disks,
    /// 40 for slow ones.
    pub write_speed: f64,
    /// Threshold for classifying measured write speed as slow at runtime.
    /// Fixed policy, independent of the declared class.
    pub slow_write_speed_limit: f64,
}

/// Memory hints reported to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HwMemory {
    /// Allotted main memory in bytes (pass-through from the flavor).
    pub size_bytes: u64,
}

/// Limits on the document store, the subsystem holding primary record data
/// on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStoreTuning {
    /// Cap on individual on-disk document-store file size. Bounds per-file
    /// memory-mapping overhead in coarse steps tied to available RAM.
    pub max_file_size_bytes: u64,
    /// Thread-pool size for document-store background work.
    pub num_threads: u32,
}

/// Memory and transaction-log budgets for the flush subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlushTuning {
    /// Aggregate memory budget for the flush subsystem.
    pub max_memory_bytes: u64,
    /// Budget for each individual flush target. Equals the aggregate budget:
    /// each target may consume the whole budget on its own. A deliberate
    /// simplification, not a sum-to-total constraint.
    pub each_max_memory_bytes: u64,
    /// Cap on transaction-log size retained during flush. Bounds recovery
    /// replay time.
    pub max_tls_size_bytes: u64,
}
