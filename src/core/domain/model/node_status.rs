//! Domain model for node status from the `/nodes/{node}/status` endpoint.

use serde::{Deserialize, Serialize};

/// Detailed status information for a Proxmox node.
///
/// Returned by `GET /nodes/{node}/status`. Sections introduced by later
/// PVE releases (`boot-info`, `current-kernel`) are optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeStatus {
    /// CPU usage (0.0 to 1.0).
    pub cpu: f64,
    pub cpuinfo: CpuInfo,
    pub memory: MemoryInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap: Option<MemoryInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rootfs: Option<RootFsInfo>,
    /// System uptime in seconds.
    pub uptime: u64,
    /// Full kernel version string.
    pub kversion: String,
    /// Load average over 1, 5 and 15 minutes, as sent by the server.
    pub loadavg: Vec<String>,
    /// e.g. "pve-manager/8.1.4/ec5affc9e41f1d79".
    #[serde(rename = "pveversion")]
    pub pve_version: String,
    /// IO delay (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ksm: Option<KsmInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_info: Option<BootInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_kernel: Option<CurrentKernel>,
}

/// Memory or swap usage in bytes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MemoryInfo {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Root filesystem usage in bytes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RootFsInfo {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub avail: u64,
}

/// Host CPU description.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CpuInfo {
    pub model: String,
    pub sockets: u32,
    pub cores: u32,
    pub cpus: u32,
    /// Clock speed in MHz, sent as a string (e.g. "4886.225").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mhz: Option<String>,
    /// "1" when hardware virtualization is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hvm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_hz: Option<u32>,
}

/// Kernel same-page merging statistics.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KsmInfo {
    /// Shared memory in bytes.
    pub shared: u64,
}

/// Firmware the host booted with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BootInfo {
    /// "efi" or "legacy-bios".
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secureboot: Option<u8>,
}

/// `uname` style description of the running kernel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CurrentKernel {
    pub sysname: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}
