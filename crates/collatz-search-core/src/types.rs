//! Strong type definitions for packet identity.
//!
//! Identifiers are plain strings on the wire but newtypes in code so an id
//! cannot be passed where a nonce is expected.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random bytes behind a generated id or nonce.
const RANDOM_ID_BYTES: usize = 16;

fn random_hex() -> String {
    let mut bytes = [0u8; RANDOM_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Work packet identifier, assigned by the coordinator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PacketId(String);

impl PacketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random 128-bit id rendered as hex.
    pub fn generate() -> Self {
        Self(random_hex())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PacketId({})", self.0)
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PacketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Per-packet nonce mixed into the authenticator.
///
/// A fresh nonce per assignment keeps an authenticator for one assignment
/// from being replayed against a reassignment of the same range.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(String);

impl Nonce {
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }

    /// Generate a random 128-bit nonce rendered as hex.
    pub fn generate() -> Self {
        Self(random_hex())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", self.0)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Nonce {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
