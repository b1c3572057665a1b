//! NodeInfo: description of the machine performing the work.
//!
//! Opaque to the search beyond `workers`; it is embedded in reports as-is.

use serde::{Deserialize, Serialize};

/// Host identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInfo {
    pub hostname: String,
    pub os: String,
    pub family: String,
    pub arch: String,
}

/// CPU inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub logical_cores: usize,
    pub physical_cores: usize,
}

/// Everything a report says about the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub host_info: HostInfo,
    pub cpu_info: CpuInfo,
    /// Number of parallel workers the search will run.
    pub workers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let info = NodeInfo {
            host_info: HostInfo {
                hostname: "cruncher".into(),
                os: "linux".into(),
                family: "unix".into(),
                arch: "x86_64".into(),
            },
            cpu_info: CpuInfo {
                logical_cores: 16,
                physical_cores: 8,
            },
            workers: 16,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["hostInfo"]["hostname"], "cruncher");
        assert_eq!(json["cpuInfo"]["logicalCores"], 16);
        assert_eq!(json["workers"], 16);
    }
}
