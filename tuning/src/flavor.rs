//! Node flavor: a static description of the hardware a backend node runs on.
//!
//! A flavor is supplied by the external inventory/provisioning system and is
//! treated as immutable input for a single tuning derivation. The tuner never
//! mutates it and never validates it beyond what the type system enforces;
//! implausible values (the provisioning layer's bug) must be rejected at that
//! boundary, not clamped here.

use serde::{Deserialize, Serialize};

use crate::constants::GB;

/// Hardware profile of a node: memory, disk, CPU, and disk-speed class.
///
/// Fields are read-only after construction. Build one with
/// [`NodeFlavor::builder`] using gigabyte-denominated setters, or
/// [`NodeFlavor::new`] with raw byte counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFlavor {
    /// Flavor name as registered with the provisioning system.
    name: String,
    /// Available main memory in bytes.
    memory_bytes: u64,
    /// Available disk capacity in bytes.
    disk_bytes: u64,
    /// Available CPU cores. Fractional values are permitted for shared or
    /// virtualized allocations.
    cpu_cores: f64,
    /// Whether the storage media is classified as fast (e.g. SSD).
    fast_disk: bool,
}

impl NodeFlavor {
    /// Create a flavor from raw byte counts.
    pub fn new(
        name: impl Into<String>,
        memory_bytes: u64,
        disk_bytes: u64,
        cpu_cores: f64,
        fast_disk: bool,
    ) -> Self {
        Self {
            name: name.into(),
            memory_bytes,
            disk_bytes,
            cpu_cores,
            fast_disk,
        }
    }

    /// Start building a flavor with zeroed resources and a slow disk.
    pub fn builder(name: impl Into<String>) -> NodeFlavorBuilder {
        NodeFlavorBuilder {
            flavor: Self::new(name, 0, 0, 0.0, false),
        }
    }

    /// Flavor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Available main memory in bytes.
    pub fn memory_bytes(&self) -> u64 {
        self.memory_bytes
    }

    /// Available disk capacity in bytes.
    pub fn disk_bytes(&self) -> u64 {
        self.disk_bytes
    }

    /// Available CPU cores (possibly fractional).
    pub fn cpu_cores(&self) -> f64 {
        self.cpu_cores
    }

    /// Whether the storage media is classified as fast.
    pub fn fast_disk(&self) -> bool {
        self.fast_disk
    }
}

/// Builder for [`NodeFlavor`] with gigabyte-denominated setters, matching
/// how the provisioning system expresses resources.
#[derive(Debug, Clone)]
pub struct NodeFlavorBuilder {
    flavor: NodeFlavor,
}

impl NodeFlavorBuilder {
    /// Set available main memory in (possibly fractional) gigabytes.
    pub fn memory_gb(mut self, gb: f64) -> Self {
        self.flavor.memory_bytes = (gb * GB as f64) as u64;
        self
    }

    /// Set available disk capacity in (possibly fractional) gigabytes.
    pub fn disk_gb(mut self, gb: f64) -> Self {
        self.flavor.disk_bytes = (gb * GB as f64) as u64;
        self
    }

    /// Set available CPU cores.
    pub fn cpu_cores(mut self, cores: f64) -> Self {
        self.flavor.cpu_cores = cores;
        self
    }

    /// Set the disk-speed class.
    pub fn fast_disk(mut self, fast: bool) -> Self {
        self.flavor.fast_disk = fast;
        self
    }

    /// Finish building.
    pub fn build(self) -> NodeFlavor {
        self.flavor
    }
}
