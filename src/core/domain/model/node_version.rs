use serde::{Deserialize, Serialize};

/// Package version of a node, from `GET /nodes/{node}/version`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeVersion {
    /// Major.minor release, e.g. "8.1".
    pub release: String,
    /// Full version, e.g. "8.1.4".
    pub version: String,
    /// Git commit of the pve-manager build.
    pub repoid: String,
}
