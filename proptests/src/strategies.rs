//! Shared proptest strategies for property-based testing.
//!
//! This module provides reusable strategies for generating:
//! - NodeFlavor instances across realistic fleet hardware ranges
//! - Coordination-server record lists

use proptest::prelude::*;
use tuning::constants::GB;
use tuning::{CoordinationServer, NodeFlavor};

/// Generate a flavor name (e.g., "c5_4xlarge", "bare_metal_02").
pub fn flavor_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][0-9]_[0-9]{1,2}xlarge",
        "bare_metal_[0-9]{2}",
        "shared_[a-z]{4}",
    ]
}

/// Generate a memory size from 512 MB up to 1 TB.
pub fn memory_bytes_strategy() -> impl Strategy<Value = u64> {
    GB / 2..=1024 * GB
}

/// Generate a disk size from 10 GB up to 100 TB.
pub fn disk_bytes_strategy() -> impl Strategy<Value = u64> {
    10 * GB..=100 * 1024 * GB
}

/// Generate a core count from fractional shared allocations up to large
/// bare-metal hosts.
pub fn cpu_cores_strategy() -> impl Strategy<Value = f64> {
    0.1f64..=256.0
}

/// Generate a valid NodeFlavor for testing.
pub fn node_flavor_strategy() -> impl Strategy<Value = NodeFlavor> {
    (
        flavor_name_strategy(),
        memory_bytes_strategy(),
        disk_bytes_strategy(),
        cpu_cores_strategy(),
        any::<bool>(),
    )
        .prop_map(|(name, memory_bytes, disk_bytes, cpu_cores, fast_disk)| {
            NodeFlavor::new(name, memory_bytes, disk_bytes, cpu_cores, fast_disk)
        })
}

/// Generate a host name (e.g., "cfg3.dc1.example.com").
pub fn host_name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,8}[0-9]{1,2}\\.dc[0-9]\\.example\\.com"
}

/// Generate a list of coordination-server records.
pub fn coordination_servers_strategy(
    max_len: usize,
) -> impl Strategy<Value = Vec<CoordinationServer>> {
    prop::collection::vec(
        (host_name_strategy(), 1024u16..=65535).prop_map(|(host, port)| {
            CoordinationServer::new(host, port)
        }),
        0..=max_len,
    )
}
