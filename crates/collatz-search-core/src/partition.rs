//! Range partitioner: one contiguous block per worker.
//!
//! Packet `k` covers `[initial + k·B, initial + (k+1)·B)`. The block size `B`
//! must be even so every packet starts on an odd seed; packet `k`'s end is
//! packet `k+1`'s start and the union is exactly `[initial, initial + W·B)`.

use chrono::{DateTime, Duration, Utc};
use num_bigint::BigUint;

use crate::error::PacketError;
use crate::packet::WorkPacket;
use crate::types::{Nonce, PacketId};
use crate::validation::validate_seed_range;

/// Seeds per packet used by the command-line search.
pub const DEFAULT_BLOCK_SIZE: u64 = 100_000_000;

/// Default time before an assigned packet counts as abandoned.
pub const DEFAULT_PACKET_TTL_HOURS: i64 = 24;

/// Splits a starting point into equal-width work packets.
#[derive(Debug, Clone)]
pub struct Partitioner {
    initial: BigUint,
    block_size: u64,
    ttl: Duration,
}

impl Partitioner {
    /// Create a partitioner, validating `initial` and `block_size`.
    pub fn new(initial: BigUint, block_size: u64) -> Result<Self, PacketError> {
        if block_size == 0 || block_size % 2 != 0 {
            return Err(PacketError::InvalidBlockSize(block_size));
        }
        validate_seed_range(&initial, &initial)?;
        Ok(Self {
            initial,
            block_size,
            ttl: Duration::hours(DEFAULT_PACKET_TTL_HOURS),
        })
    }

    /// Set the time-to-live stamped on each packet.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn initial(&self) -> &BigUint {
        &self.initial
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Start of block `k`.
    pub fn block_start(&self, k: usize) -> BigUint {
        &self.initial + BigUint::from(self.block_size) * BigUint::from(k)
    }

    /// Split into `workers` packets with random ids and nonces.
    pub fn split(
        &self,
        workers: usize,
        assigned_on: DateTime<Utc>,
    ) -> Result<Vec<WorkPacket>, PacketError> {
        self.split_with(workers, assigned_on, |_| {
            (PacketId::generate(), Nonce::generate())
        })
    }

    /// Split into `workers` packets, drawing identity for packet `k` from `identity(k)`.
    pub fn split_with<F>(
        &self,
        workers: usize,
        assigned_on: DateTime<Utc>,
        mut identity: F,
    ) -> Result<Vec<WorkPacket>, PacketError>
    where
        F: FnMut(usize) -> (PacketId, Nonce),
    {
        if workers == 0 {
            return Err(PacketError::NoWorkers);
        }

        let width = BigUint::from(self.block_size);
        let mut start = self.initial.clone();
        let mut packets = Vec::with_capacity(workers);

        for k in 0..workers {
            let end = &start + &width;
            let (id, nonce) = identity(k);
            packets.push(WorkPacket::new(
                id,
                nonce,
                start,
                end.clone(),
                assigned_on,
                self.ttl,
            )?);
            start = end;
        }

        Ok(packets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use num_traits::One;
    use proptest::prelude::*;

    fn assigned() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap()
    }

    fn bit40_plus_one() -> BigUint {
        (BigUint::one() << 40usize) + 1u32
    }

    #[test]
    fn test_two_workers_block_100() {
        let initial = bit40_plus_one();
        let packets = Partitioner::new(initial.clone(), 100)
            .unwrap()
            .split(2, assigned())
            .unwrap();

        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].starting_value(), &initial);
        assert_eq!(packets[0].ending_value(), &(&initial + 100u32));
        assert_eq!(packets[1].starting_value(), &(&initial + 100u32));
        assert_eq!(packets[1].ending_value(), &(&initial + 200u32));
        assert!(!packets[0].overlaps(&packets[1]));
    }

    #[test]
    fn test_identity_callback() {
        let packets = Partitioner::new(BigUint::from(1u32), 10)
            .unwrap()
            .split_with(3, assigned(), |k| {
                (PacketId::new(format!("packet-{k}")), Nonce::new(format!("nonce-{k}")))
            })
            .unwrap();
        assert_eq!(packets[2].id().as_str(), "packet-2");
        assert_eq!(packets[2].nonce().as_str(), "nonce-2");
    }

    #[test]
    fn test_random_identity_unique() {
        let packets = Partitioner::new(BigUint::from(1u32), 10)
            .unwrap()
            .split(4, assigned())
            .unwrap();
        assert_ne!(packets[0].id(), packets[1].id());
        assert_ne!(packets[0].nonce(), packets[1].nonce());
    }

    #[test]
    fn test_ttl_applied() {
        let packets = Partitioner::new(BigUint::from(1u32), 10)
            .unwrap()
            .with_ttl(Duration::minutes(30))
            .split(1, assigned())
            .unwrap();
        assert_eq!(packets[0].expiry(), assigned() + Duration::minutes(30));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let one = BigUint::from(1u32);
        assert_eq!(
            Partitioner::new(one.clone(), 0).unwrap_err(),
            PacketError::InvalidBlockSize(0)
        );
        assert_eq!(
            Partitioner::new(one.clone(), 101).unwrap_err(),
            PacketError::InvalidBlockSize(101)
        );
        assert!(matches!(
            Partitioner::new(BigUint::from(2u32), 100),
            Err(PacketError::EvenStart(_))
        ));
        assert_eq!(
            Partitioner::new(BigUint::from(0u32), 100).unwrap_err(),
            PacketError::ZeroStart
        );
        assert_eq!(
            Partitioner::new(one, 100).unwrap().split(0, assigned()).unwrap_err(),
            PacketError::NoWorkers
        );
    }

    proptest! {
        #[test]
        fn test_partition_covers_range(
            initial in (0u64..1 << 50).prop_map(|n| 2 * n + 1),
            half_block in 1u64..10_000,
            workers in 1usize..32,
        ) {
            let block = half_block * 2;
            let initial = BigUint::from(initial);
            let partitioner = Partitioner::new(initial.clone(), block).unwrap();
            let packets = partitioner.split(workers, assigned()).unwrap();

            prop_assert_eq!(packets.len(), workers);
            for (k, packet) in packets.iter().enumerate() {
                let expected = &initial + BigUint::from(block) * BigUint::from(k);
                prop_assert_eq!(packet.starting_value(), &expected);
                prop_assert_eq!(packet.starting_value(), &partitioner.block_start(k));
                prop_assert_eq!(packet.width(), BigUint::from(block));
                prop_assert!(packet.starting_value().bit(0));
            }
            for pair in packets.windows(2) {
                prop_assert_eq!(pair[0].ending_value(), pair[1].starting_value());
                prop_assert!(!pair[0].overlaps(&pair[1]));
            }
            let end = &initial + BigUint::from(block) * BigUint::from(workers);
            prop_assert_eq!(packets[workers - 1].ending_value(), &end);
        }
    }
}
