//! Scalar fields whose wire type changed between Proxmox VE releases.
//!
//! For example LXC `vmid`s were sent as strings by PVE 8.1.x and as integers
//! by 8.2.x, while disk `wearout` is a number for SSDs and `"N/A"` for
//! spinning disks. Both encodings are folded into one string value.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// A value sent either as a JSON integer or as a JSON string.
///
/// Decoding tries an integer first and renders it in canonical decimal form,
/// then falls back to a string taken verbatim. The integer `104` and the
/// string `"104"` produce the same value. Anything else (floats, booleans,
/// null, arrays, objects) is rejected with an error naming both attempts.
///
/// # Examples
///
/// ```
/// use proxmox_api_client::IntOrString;
///
/// let from_int: IntOrString = serde_json::from_str("104").unwrap();
/// let from_str: IntOrString = serde_json::from_str("\"104\"").unwrap();
/// assert_eq!(from_int, from_str);
/// assert_eq!(from_int.as_str(), "104");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntOrString(String);

impl IntOrString {
    /// Returns the normalized value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parses the value as a signed integer, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for IntOrString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IntOrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for IntOrString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for IntOrString {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for IntOrString {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for IntOrString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IntOrString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for IntOrString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IntOrString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntOrStringVisitor)
    }
}

struct IntOrStringVisitor;

impl IntOrStringVisitor {
    /// Builds the error for a token that is neither an integer nor a string.
    fn reject<E: de::Error>(unexpected: Unexpected<'_>) -> E {
        E::custom(format_args!(
            "failed to decode as either integer or string: \
             integer error: invalid type: {unexpected}, expected an integer | \
             string error: invalid type: {unexpected}, expected a string"
        ))
    }
}

impl<'de> Visitor<'de> for IntOrStringVisitor {
    type Value = IntOrString;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or a string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(IntOrString::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(IntOrString::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(IntOrString::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(IntOrString(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Err(Self::reject(Unexpected::Float(value)))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Err(Self::reject(Unexpected::Bool(value)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::reject(Unexpected::Unit))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::reject(Unexpected::Option))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(Self::reject(Unexpected::Seq))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(Self::reject(Unexpected::Map))
    }
}
