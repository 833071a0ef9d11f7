//! Serde helpers for fields that need a richer Rust type than their wire form.

use serde::{Deserialize, Deserializer, Serializer};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// `SystemTime` carried on the wire as whole seconds since the UNIX epoch,
/// as used by certificate `notbefore`/`notafter`.
pub mod unix_seconds {
    use super::*;

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let secs = time
            .duration_since(UNIX_EPOCH)
            .map_err(|_| serde::ser::Error::custom("timestamp is before the UNIX epoch"))?
            .as_secs();
        serializer.serialize_u64(secs)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        UNIX_EPOCH
            .checked_add(Duration::from_secs(secs))
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp {secs} is out of range")))
    }
}
