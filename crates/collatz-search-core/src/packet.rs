//! WorkPacket: a contiguous range of seeds assigned to one worker.
//!
//! The range is half-open: `[starting_value, ending_value)`. Only odd seeds
//! are tested, so a packet of width `B` holds `B / 2` candidates when `B` is
//! even. Packets are immutable once built; fields are reachable only through
//! accessors, and deserialization runs the same validation as construction.

use chrono::{DateTime, Duration, Utc};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::PacketError;
use crate::types::{Nonce, PacketId};
use crate::validation::validate_seed_range;

/// An assigned, bounded range of seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WirePacket")]
pub struct WorkPacket {
    id: PacketId,
    nonce: Nonce,
    #[serde(with = "crate::decimal")]
    starting_value: BigUint,
    #[serde(with = "crate::decimal")]
    ending_value: BigUint,
    assigned_on: DateTime<Utc>,
    expiry: DateTime<Utc>,
}

impl WorkPacket {
    /// Build a packet covering `[start, end)`, expiring `ttl` after assignment.
    pub fn new(
        id: PacketId,
        nonce: Nonce,
        start: BigUint,
        end: BigUint,
        assigned_on: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, PacketError> {
        let expiry = assigned_on
            .checked_add_signed(ttl)
            .ok_or(PacketError::ExpiryOverflow)?;
        Self::with_expiry(id, nonce, start, end, assigned_on, expiry)
    }

    /// Build a packet with an explicit expiry timestamp.
    pub fn with_expiry(
        id: PacketId,
        nonce: Nonce,
        start: BigUint,
        end: BigUint,
        assigned_on: DateTime<Utc>,
        expiry: DateTime<Utc>,
    ) -> Result<Self, PacketError> {
        validate_seed_range(&start, &end)?;
        Ok(Self {
            id,
            nonce,
            starting_value: start,
            ending_value: end,
            assigned_on,
            expiry,
        })
    }

    pub fn id(&self) -> &PacketId {
        &self.id
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// First seed tested (inclusive, always odd).
    pub fn starting_value(&self) -> &BigUint {
        &self.starting_value
    }

    /// End of the range (exclusive).
    pub fn ending_value(&self) -> &BigUint {
        &self.ending_value
    }

    pub fn assigned_on(&self) -> DateTime<Utc> {
        self.assigned_on
    }

    /// Cutoff after which a coordinator may treat the packet as abandoned.
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// Advisory only; nothing in the search enforces expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }

    /// Width of the range in integers.
    pub fn width(&self) -> BigUint {
        &self.ending_value - &self.starting_value
    }

    /// Number of odd seeds in `[start, end)`.
    pub fn candidate_count(&self) -> BigUint {
        (self.width() + 1u32) >> 1usize
    }

    /// Whether `seed` falls inside the half-open range.
    pub fn contains(&self, seed: &BigUint) -> bool {
        seed >= &self.starting_value && seed < &self.ending_value
    }

    /// Whether two packets share any seed.
    pub fn overlaps(&self, other: &WorkPacket) -> bool {
        self.starting_value < other.ending_value && other.starting_value < self.ending_value
    }

    /// Candidate count as `u64`, when it fits.
    pub fn candidate_count_u64(&self) -> Option<u64> {
        self.candidate_count().to_u64()
    }
}

/// Unvalidated wire form, checked on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePacket {
    id: PacketId,
    nonce: Nonce,
    #[serde(with = "crate::decimal")]
    starting_value: BigUint,
    #[serde(with = "crate::decimal")]
    ending_value: BigUint,
    assigned_on: DateTime<Utc>,
    expiry: DateTime<Utc>,
}

impl TryFrom<WirePacket> for WorkPacket {
    type Error = PacketError;

    fn try_from(wire: WirePacket) -> Result<Self, Self::Error> {
        WorkPacket::with_expiry(
            wire.id,
            wire.nonce,
            wire.starting_value,
            wire.ending_value,
            wire.assigned_on,
            wire.expiry,
        )
    }
}
