//! Domain model for `GET /cluster/status`.

use serde::{Deserialize, Serialize};

/// One entry of the cluster status list.
///
/// The list holds one `"cluster"` entry (only present when the node is part
/// of a cluster) followed by one `"node"` entry per member.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterStatusEntry {
    /// "cluster" or "node/<name>".
    pub id: String,
    pub name: String,
    /// "cluster" or "node".
    #[serde(rename = "type")]
    pub entry_type: String,
    // cluster entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quorate: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u32>,
    // node entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// 1 for the node that answered the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodeid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<u8>,
}
