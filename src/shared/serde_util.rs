//! Custom serde helpers for the node's wire formats.
//!
//! LND's REST gateway follows the proto3 JSON mapping: 64-bit integers are
//! sent as decimal strings and `bytes` fields as base64.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Int64Repr {
    Str(String),
    Unsigned(u64),
    Signed(i64),
}

/// `uint64` carried as a decimal string (a bare JSON number is accepted too).
pub mod u64_string {
    use super::*;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Int64Repr::deserialize(deserializer)? {
            Int64Repr::Str(s) if s.is_empty() => Ok(0),
            Int64Repr::Str(s) => s
                .parse::<u64>()
                .map_err(|e| serde::de::Error::custom(format!("Invalid uint64 '{}': {}", s, e))),
            Int64Repr::Unsigned(n) => Ok(n),
            Int64Repr::Signed(n) => Err(serde::de::Error::custom(format!(
                "Negative value {} for uint64 field",
                n
            ))),
        }
    }
}

/// `int64` carried as a decimal string (a bare JSON number is accepted too).
pub mod i64_string {
    use super::*;

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Int64Repr::deserialize(deserializer)? {
            Int64Repr::Str(s) if s.is_empty() => Ok(0),
            Int64Repr::Str(s) => s
                .parse::<i64>()
                .map_err(|e| serde::de::Error::custom(format!("Invalid int64 '{}': {}", s, e))),
            Int64Repr::Unsigned(n) => i64::try_from(n)
                .map_err(|_| serde::de::Error::custom(format!("int64 out of range: {}", n))),
            Int64Repr::Signed(n) => Ok(n),
        }
    }
}

/// Optional `uint64` sent as a decimal string; pair with
/// `skip_serializing_if = "Option::is_none"`.
pub mod opt_u64_string {
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }
}
