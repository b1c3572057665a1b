//! Node description.

use std::io;

use collatz_search_core::{CpuInfo, HostInfo, NodeInfo};

use crate::error::NodeError;

/// Source of the [`NodeInfo`] embedded in every report.
pub trait NodeDescriber {
    /// Describe the node. An error here aborts the search before any
    /// packet is handed out.
    fn describe(&self) -> Result<NodeInfo, NodeError>;
}

/// Reads the description from the running machine.
///
/// The worker count defaults to the number of logical CPUs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalNode {
    workers: Option<usize>,
}

impl LocalNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
}

impl NodeDescriber for LocalNode {
    fn describe(&self) -> Result<NodeInfo, NodeError> {
        let cpu_info = CpuInfo {
            logical_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
        };
        let workers = self.workers.unwrap_or(cpu_info.logical_cores);
        if workers == 0 {
            return Err(NodeError::InvalidWorkerCount(workers));
        }

        Ok(NodeInfo {
            host_info: HostInfo {
                hostname: hostname()?,
                os: std::env::consts::OS.to_string(),
                family: std::env::consts::FAMILY.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            },
            cpu_info,
            workers,
        })
    }
}

/// A fixed description, for tests and for callers that already know the node.
#[derive(Debug, Clone, Default)]
pub struct StaticNode(pub NodeInfo);

impl NodeDescriber for StaticNode {
    fn describe(&self) -> Result<NodeInfo, NodeError> {
        if self.0.workers == 0 {
            return Err(NodeError::InvalidWorkerCount(0));
        }
        Ok(self.0.clone())
    }
}

fn hostname() -> Result<String, NodeError> {
    for var in ["HOSTNAME", "COMPUTERNAME"] {
        if let Ok(name) = std::env::var(var) {
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }

    match std::fs::read_to_string("/etc/hostname") {
        Ok(contents) => match contents.trim() {
            "" => Ok(fallback_hostname()),
            name => Ok(name.to_string()),
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(fallback_hostname()),
        Err(e) => Err(NodeError::Hostname(e)),
    }
}

fn fallback_hostname() -> String {
    "localhost".to_string()
}
