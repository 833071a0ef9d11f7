//! Domain model for `GET /cluster/ceph/status`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ceph cluster status. Only the health section is modelled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CephStatus {
    pub health: CephHealth,
}

/// Overall Ceph health.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CephHealth {
    /// "HEALTH_OK", "HEALTH_WARN" or "HEALTH_ERR".
    pub status: String,
    /// Active health checks keyed by check name, kept as raw JSON.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub checks: BTreeMap<String, serde_json::Value>,
}

impl CephHealth {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "HEALTH_OK"
    }
}
