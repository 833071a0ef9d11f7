//! Domain model for `GET /nodes/{node}/certificates/info`.

use crate::core::domain::value_object::serde_helpers::unix_seconds;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A TLS certificate installed on a node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CertificateInfo {
    /// e.g. "pve-root-ca.pem", "pve-ssl.pem".
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(rename = "notbefore", with = "unix_seconds")]
    pub not_before: SystemTime,
    #[serde(rename = "notafter", with = "unix_seconds")]
    pub not_after: SystemTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_bits: Option<u32>,
    /// Subject alternative names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub san: Vec<String>,
    /// The certificate in PEM encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pem: Option<String>,
}

impl CertificateInfo {
    /// Returns `true` if `at` lies within `not_before..=not_after`.
    #[must_use]
    pub fn is_valid_at(&self, at: SystemTime) -> bool {
        self.not_before <= at && at <= self.not_after
    }
}
