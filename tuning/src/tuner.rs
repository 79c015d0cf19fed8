//! The flavor tuner: hardware profile in, tuning configuration out.
//!
//! Each rule is independent and composed into one output record:
//!
//! - **Hardware echo**: disk and memory sizes pass through unchanged so the
//!   backend can self-report its allotment without querying the OS.
//! - **Disk speed hint**: declared class picks the write-speed hint; the
//!   slow-speed classification threshold is fixed fleet-wide policy.
//! - **Document-store file size**: tiered on memory with inclusive upper
//!   bounds, first matching tier wins.
//! - **Document-store threads**: one thread per two cores, floor of 8.
//! - **Flush memory**: 1/8 of node memory, used for both the aggregate and
//!   the per-target budget.
//! - **TLS cap**: 7% of disk, ceiling of 100 GB.
//!
//! The thresholds are policy tables with exact breakpoints, kept as ordered
//! comparisons rather than derived formulas.

use tracing::debug;

use crate::config::{DocumentStoreTuning, FlushTuning, HwDisk, HwInfo, HwMemory, TuningConfig};
use crate::constants::{
    FAST_DISK_WRITE_SPEED, FLUSH_MEMORY_DIVISOR, GB, MAX_TLS_SIZE, MB, MIN_DOCUMENT_STORE_THREADS,
    SLOW_DISK_WRITE_SPEED, SLOW_WRITE_SPEED_LIMIT, TLS_DISK_FRACTION,
};
use crate::flavor::NodeFlavor;

/// Derive the tuning configuration for a node of the given flavor.
///
/// Pure and total over non-negative inputs: no side effects, no hidden
/// state, and identical flavors always yield byte-identical output.
pub fn tune(flavor: &NodeFlavor) -> TuningConfig {
    let config = TuningConfig {
        hwinfo: tune_hwinfo(flavor),
        document_store: tune_document_store(flavor),
        flush: tune_flush(flavor),
    };

    debug!(
        flavor = flavor.name(),
        memory_bytes = flavor.memory_bytes(),
        disk_bytes = flavor.disk_bytes(),
        num_threads = config.document_store.num_threads,
        max_tls_size_bytes = config.flush.max_tls_size_bytes,
        "derived node tuning"
    );

    config
}

fn tune_hwinfo(flavor: &NodeFlavor) -> HwInfo {
    let write_speed = if flavor.fast_disk() {
        FAST_DISK_WRITE_SPEED
    } else {
        SLOW_DISK_WRITE_SPEED
    };
    HwInfo {
        disk: HwDisk {
            size_bytes: flavor.disk_bytes(),
            write_speed,
            slow_write_speed_limit: SLOW_WRITE_SPEED_LIMIT,
        },
        memory: HwMemory {
            size_bytes: flavor.memory_bytes(),
        },
    }
}

fn tune_document_store(flavor: &NodeFlavor) -> DocumentStoreTuning {
    DocumentStoreTuning {
        max_file_size_bytes: document_store_max_file_size(flavor.memory_bytes()),
        num_threads: document_store_num_threads(flavor.cpu_cores()),
    }
}

/// Tiered on available memory, inclusive upper bounds, first match wins.
/// Coarse steps bound per-file mmap overhead without fragmenting tuning
/// values across fleet heterogeneity.
fn document_store_max_file_size(memory_bytes: u64) -> u64 {
    if memory_bytes <= 12 * GB {
        256 * MB
    } else if memory_bytes <= 16 * GB {
        512 * MB
    } else if memory_bytes <= 64 * GB {
        GB
    } else {
        4 * GB
    }
}

/// One thread per two cores, floor of 8. Halves round away from zero
/// (round-half-up for non-negative cores); a documented tie-break, since
/// fractional core counts can land exactly on .5.
fn document_store_num_threads(cpu_cores: f64) -> u32 {
    let scaled = (cpu_cores / 2.0).round() as u32;
    scaled.max(MIN_DOCUMENT_STORE_THREADS)
}

fn tune_flush(flavor: &NodeFlavor) -> FlushTuning {
    // Each target may consume the whole aggregate budget on its own.
    let max_memory_bytes = flavor.memory_bytes() / FLUSH_MEMORY_DIVISOR;
    FlushTuning {
        max_memory_bytes,
        each_max_memory_bytes: max_memory_bytes,
        max_tls_size_bytes: flush_max_tls_size(flavor.disk_bytes()),
    }
}

/// 7% of disk, capped fleet-wide at 100 GB to bound recovery replay time
/// on large-disk nodes.
fn flush_max_tls_size(disk_bytes: u64) -> u64 {
    let tls_size = (disk_bytes as f64 * TLS_DISK_FRACTION) as u64;
    tls_size.min(MAX_TLS_SIZE)
}
