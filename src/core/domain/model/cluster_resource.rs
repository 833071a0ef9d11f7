//! Domain models for cluster-wide resources.
//!
//! `GET /cluster/resources` returns a heterogeneous list (VMs, containers,
//! storages, nodes, SDN zones, pools) identified by a `type` field. Each
//! entry is decoded into one flat record; fields that only exist for some
//! resource types are optional, so "not sent" stays distinguishable from 0.

use crate::core::domain::value_object::IntOrString;
use serde::{Deserialize, Serialize};

/// Kind of a cluster resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A QEMU virtual machine.
    Qemu,
    /// An LXC container.
    Lxc,
    /// Legacy OpenVZ container.
    Openvz,
    /// A storage entity.
    Storage,
    /// A node in the cluster.
    Node,
    /// An SDN zone.
    Sdn,
    /// A resource pool.
    Pool,
    /// A type this library does not know yet.
    #[serde(other)]
    Unknown,
}

/// A resource discovered in the Proxmox cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterResource {
    /// Unique resource identifier (e.g., `qemu/100`, `storage/pve1/local`).
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Node the resource lives on (absent for pools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Resource status (e.g., `running`, `online`, `available`, `ok`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Guest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Guest identifier (QEMU/LXC only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmid: Option<IntOrString>,
    /// CPU usage (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxcpu: Option<u32>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
    /// Disk usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxdisk: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diskread: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diskwrite: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netin: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netout: Option<u64>,
    /// Uptime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// 1 when the guest is a template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<u8>,
    /// HA manager state of the guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hastate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Pool the guest or storage belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// Node cgroup version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgroup_mode: Option<u8>,
    /// Node support subscription level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Storage identifier (storage only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    /// Storage plugin type, e.g. `dir`, `zfspool`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugintype: Option<String>,
    /// Comma separated storage content types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<u8>,
    /// SDN zone name (sdn only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdn: Option<String>,
}

impl ClusterResource {
    /// Returns `true` for QEMU VMs and containers.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        matches!(
            self.resource_type,
            ResourceType::Qemu | ResourceType::Lxc | ResourceType::Openvz
        )
    }
}
