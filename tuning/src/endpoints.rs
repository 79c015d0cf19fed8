//! Endpoint specs for the cluster of config-serving processes.
//!
//! Re-tuples coordination-server records from the cluster topology into the
//! address tuples that service-discovery and connection logic consume. No
//! computation beyond field mapping; input is assumed pre-validated by the
//! topology layer.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A coordination-server record from the cluster topology: the host it runs
/// on and the port its coordination service listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinationServer {
    pub host_name: String,
    pub port: u16,
}

impl CoordinationServer {
    pub fn new(host_name: impl Into<String>, port: u16) -> Self {
        Self {
            host_name: host_name.into(),
            port,
        }
    }
}

/// The full address tuple for reaching one config-serving process.
///
/// Immutable once constructed; identity is value equality over the host name
/// and all three ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    host_name: String,
    rpc_port: u16,
    http_port: u16,
    coordination_port: u16,
}

impl EndpointSpec {
    pub fn new(
        host_name: impl Into<String>,
        rpc_port: u16,
        http_port: u16,
        coordination_port: u16,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            rpc_port,
            http_port,
            coordination_port,
        }
    }

    /// Map coordination-server records to endpoint specs, preserving input
    /// order. Every spec shares the configured base RPC port.
    ///
    /// The HTTP port is assumed to be one above the RPC port. This is a
    /// convention, not a guarantee from the coordination servers themselves.
    // TODO We cannot be sure that the http port always is rpc_port + 1
    pub fn from_records(base_rpc_port: u16, records: &[CoordinationServer]) -> Vec<EndpointSpec> {
        records
            .iter()
            .map(|server| {
                EndpointSpec::new(
                    server.host_name.clone(),
                    base_rpc_port,
                    base_rpc_port + 1,
                    server.port,
                )
            })
            .collect()
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn coordination_port(&self) -> u16 {
        self.coordination_port
    }
}

/// Hashes the host name only. Specs differing solely in ports collide,
/// which is acceptable for the small sets service discovery works with.
impl Hash for EndpointSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host_name.hash(state);
    }
}

impl fmt::Display for EndpointSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hostname={}, rpc port={}, http port={}, coordination port={}",
            self.host_name, self.rpc_port, self.http_port, self.coordination_port
        )
    }
}
