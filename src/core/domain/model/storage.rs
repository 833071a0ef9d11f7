//! Domain model for `GET /nodes/{node}/storage`.

use serde::{Deserialize, Serialize};

/// A storage as seen from one node.
///
/// Disabled or unreachable storages omit the usage figures.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeStorage {
    /// Storage identifier, e.g. "local-lvm".
    pub storage: String,
    /// Plugin type, e.g. "dir", "lvmthin", "zfspool", "nfs".
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Comma separated content types, e.g. "images,rootdir".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<u8>,
    /// Capacity in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avail: Option<u64>,
    /// `used / total`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_fraction: Option<f64>,
}
