//! Serde adapter that carries [`BigUint`] values as decimal strings.
//!
//! Use with `#[serde(with = "crate::decimal")]`.

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(de::Error::custom)
}

/// Parse a base-10 integer, rejecting signs and empty input.
pub fn parse(s: &str) -> Result<BigUint, crate::error::PacketError> {
    BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| crate::error::PacketError::MalformedInteger(s.to_string()))
}
