//! Domain model for `GET /nodes/{node}/disks/list`.

use crate::core::domain::value_object::IntOrString;
use serde::{Deserialize, Serialize};

/// A physical disk attached to a node.
///
/// `rpm` and `wearout` are numbers for some devices and strings (e.g.
/// `"N/A"`) for others, hence [`IntOrString`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiskInfo {
    /// Device node, e.g. "/dev/nvme0n1".
    pub devpath: String,
    /// Size in bytes.
    pub size: u64,
    /// "ssd", "hdd", "nvme", "usb" or "unknown".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wwn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_id_link: Option<String>,
    /// SMART health, e.g. "PASSED".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    /// What the disk is used for, e.g. "LVM", "ZFS", "BIOS boot".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<String>,
    /// 1 when the disk carries a GPT partition table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpt: Option<u8>,
    /// Rotational speed; 0 for solid state devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<IntOrString>,
    /// Remaining SSD life in percent, or "N/A".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wearout: Option<IntOrString>,
    /// Set when the disk backs a Ceph bluestore OSD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bluestore: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osdencrypted: Option<u8>,
}
