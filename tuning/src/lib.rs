//! Hardware-flavor tuning for a search backend node.
//!
//! This crate derives the performance-tuning parameters of a storage/search
//! backend process from a static description of the machine it will run on.
//! Given a node flavor (memory, disk, CPU cores, disk-speed class) it
//! produces a concrete [`TuningConfig`]: hardware-size hints, document-store
//! file-size and thread-count limits, and flush/transaction-log sizing
//! thresholds.
//!
//! # Components
//!
//! - **Flavor tuner** ([`tune`]): the policy core. Encodes operational
//!   knowledge (how much of a machine's memory or disk each backend
//!   subsystem may consume) as explicit thresholds and caps.
//! - **Endpoint specs** ([`EndpointSpec`]): re-tuples coordination-server
//!   records into the address tuples used to reach a cluster of
//!   config-serving processes. Purely structural.
//!
//! # Key Design Principles
//!
//! - **Pure derivation**: the same flavor always yields byte-identical
//!   output. No I/O, no cache, no cross-call state; safe to call from any
//!   thread without coordination.
//! - **Policy tables, not curves**: the tiered rules (file size, flush
//!   memory fraction, TLS cap) are ordered threshold lists with exact
//!   breakpoints. The breakpoints are the contract; they are never smoothed
//!   into a continuous function.
//! - **Boundary validation is the caller's job**: the tuner is total over
//!   non-negative inputs and never clamps or rejects a malformed flavor.

pub mod constants;
pub mod endpoints;
pub mod flavor;
pub mod tuner;

mod config;

pub use config::{DocumentStoreTuning, FlushTuning, HwDisk, HwInfo, HwMemory, TuningConfig};
pub use endpoints::{CoordinationServer, EndpointSpec};
pub use flavor::{NodeFlavor, NodeFlavorBuilder};
pub use tuner::tune;
